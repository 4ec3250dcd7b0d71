use proc_macro::{Delimiter, Literal, Span, TokenStream, TokenTree};

use crate::entry::output::{Config, ItemOutput};
use crate::entry::Error;

/// A parser for the arguments provided to an entry macro.
pub(crate) struct ConfigParser<'a> {
    it: std::iter::Peekable<proc_macro::token_stream::IntoIter>,
    errors: &'a mut Vec<Error>,
}

impl<'a> ConfigParser<'a> {
    /// Construct a new parser around the given token stream.
    pub(crate) fn new(stream: TokenStream, errors: &'a mut Vec<Error>) -> Self {
        Self {
            it: stream.into_iter().peekable(),
            errors,
        }
    }

    /// Parse the configuration.
    pub(crate) fn parse(mut self) -> Config {
        let mut config = Config::default();

        while self.it.peek().is_some() {
            if self.parse_option(&mut config).is_none() {
                self.recover();
                continue;
            }

            if !self.skip_comma() {
                break;
            }
        }

        if let Some(tt) = self.it.next() {
            self.errors.push(Error::new(tt.span(), "trailing token"));
        }

        config
    }

    /// Recover by parsing either to the next comma `,`, or end of input.
    fn recover(&mut self) {
        while self.it.peek().is_some() {
            if self.skip_comma() {
                break;
            }

            self.it.next();
        }
    }

    fn skip_comma(&mut self) -> bool {
        match self.it.peek() {
            Some(TokenTree::Punct(p)) if p.as_char() == ',' => {
                self.it.next();
                true
            }
            _ => false,
        }
    }

    /// Parse a single `name = value` option.
    fn parse_option(&mut self, config: &mut Config) -> Option<()> {
        let ident = match self.it.next() {
            Some(TokenTree::Ident(ident)) => ident,
            tt => {
                let span = tt.map(|tt| tt.span()).unwrap_or_else(Span::call_site);
                self.errors.push(Error::new(span, "expected identifier"));
                return None;
            }
        };

        let name = ident.to_string();

        match name.as_str() {
            "input" => {
                self.parse_eq()?;
                config.input_file = Some(self.parse_literal()?);
            }
            "answers" => {
                self.parse_eq()?;
                config.answers_file = Some(self.parse_literal()?);
            }
            "labels" => {
                self.parse_eq()?;

                match self.it.next() {
                    Some(TokenTree::Group(g)) if g.delimiter() == Delimiter::Bracket => {
                        config.labels = Some(g.stream());
                    }
                    tt => {
                        let span = tt.map(|tt| tt.span()).unwrap_or_else(Span::call_site);
                        self.errors
                            .push(Error::new(span, "expected array of labels `[..]`"));
                        return None;
                    }
                }
            }
            "expect" => {
                self.parse_eq()?;

                let Some(tt) = self.it.next() else {
                    self.errors
                        .push(Error::new(ident.span(), "expected value after `=`"));
                    return None;
                };

                config.expect = Some(tt);
            }
            _ => {
                self.errors
                    .push(Error::new(ident.span(), format!("unknown option `{name}`")));
                return None;
            }
        }

        Some(())
    }

    /// Parse the next element as a string literal.
    fn parse_literal(&mut self) -> Option<Literal> {
        match self.it.next() {
            Some(TokenTree::Literal(literal)) if literal.to_string().starts_with('"') => {
                Some(literal)
            }
            tt => {
                let span = tt.map(|tt| tt.span()).unwrap_or_else(Span::call_site);
                self.errors.push(Error::new(span, "expected string literal"));
                None
            }
        }
    }

    /// Parse the next element as an `=` punctuation.
    fn parse_eq(&mut self) -> Option<()> {
        match self.it.next() {
            Some(TokenTree::Punct(p)) if p.as_char() == '=' => Some(()),
            tt => {
                let span = tt.map(|tt| tt.span()).unwrap_or_else(Span::call_site);
                self.errors.push(Error::new(span, "expected assignment `=`"));
                None
            }
        }
    }
}

/// A parser for the item annotated with an entry macro.
pub(crate) struct ItemParser {
    stream: TokenStream,
}

impl ItemParser {
    /// Construct a new parser around the given token stream.
    pub(crate) fn new(stream: TokenStream) -> Self {
        Self { stream }
    }

    /// Find the name of the annotated function.
    pub(crate) fn parse(self) -> ItemOutput {
        let mut next_is_name = false;

        for tt in self.stream {
            let TokenTree::Ident(ident) = tt else {
                continue;
            };

            if next_is_name {
                return ItemOutput::new(Some(ident));
            }

            next_is_name = ident.to_string() == "fn";
        }

        ItemOutput::new(None)
    }
}
