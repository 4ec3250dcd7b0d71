use proc_macro::{Delimiter, Group, Ident, Literal, Punct, Spacing, Span, TokenStream, TokenTree};

use crate::entry::Error;

#[derive(Default)]
pub(crate) struct Config {
    pub(crate) input_file: Option<Literal>,
    pub(crate) answers_file: Option<Literal>,
    pub(crate) labels: Option<TokenStream>,
    pub(crate) expect: Option<TokenTree>,
}

impl Config {
    /// Validate the parsed configuration.
    pub(crate) fn validate(&self, errors: &mut Vec<Error>) {
        if self.input_file.is_none() {
            errors.push(Error::new(Span::call_site(), "missing `input` argument"));
        }
    }
}

/// The parsed item output.
pub(crate) struct ItemOutput {
    fn_name: Option<Ident>,
}

impl ItemOutput {
    pub(crate) fn new(fn_name: Option<Ident>) -> Self {
        Self { fn_name }
    }

    /// Validate the parsed item.
    pub(crate) fn validate(&self, errors: &mut Vec<Error>) {
        if self.fn_name.is_none() {
            errors.push(Error::new(
                Span::call_site(),
                "`#[entry]` must be used on a function",
            ));
        }
    }

    /// Expand into a `main` function which wraps the original item.
    pub(crate) fn expand(&self, config: &Config, item_stream: TokenStream) -> TokenStream {
        let (Some(name), Some(input)) = (&self.fn_name, &config.input_file) else {
            return item_stream;
        };

        let labels = match &config.labels {
            Some(labels) => labels.to_string(),
            None => String::new(),
        };

        let answers = match &config.answers_file {
            Some(answers) => format!("Some(lib::answers!({answers}))"),
            None => String::from("None"),
        };

        let (check, bench) = match &config.expect {
            Some(expect) => (
                format!("let expected = {expect}; lib::cli::expect(&value, &expected)?;"),
                format!("b.iter(&opts, {expect}, || {name}(input))?;"),
            ),
            None => (
                String::new(),
                format!("b.iter_unchecked(&opts, || {name}(input))?;"),
            ),
        };

        let body = format!(
            r#"
            let opts = lib::cli::Opts::parse()?;
            let input = lib::input!({input})?;

            match opts.mode {{
                lib::cli::Mode::Default => {{
                    let value = match {name}(input) {{
                        Ok(value) => value,
                        Err(error) => return Err(lib::cli::error_context(input, error)),
                    }};

                    lib::cli::publish(&opts, {answers}, &[{labels}], &value)?;
                    {check}
                }}
                lib::cli::Mode::Bench => {{
                    let mut b = lib::cli::Bencher::new();
                    {bench}
                }}
            }}

            Ok(())
            "#
        );

        let mut block = TokenStream::new();
        block.extend(item_stream);
        block.extend(parse(&body));

        let mut stream = parse("fn main() -> lib::prelude::Result<()>");
        stream.extend([TokenTree::Group(Group::new(Delimiter::Brace, block))]);
        stream
    }
}

/// Parse generated code, which is expected to always be valid.
fn parse(code: &str) -> TokenStream {
    match code.parse() {
        Ok(stream) => stream,
        Err(error) => compile_error(Span::call_site(), &format!("bad expansion: {error}")),
    }
}

/// Construct a `compile_error!` invocation with the given message.
pub(crate) fn compile_error(span: Span, message: &str) -> TokenStream {
    let message = TokenTree::Literal(Literal::string(message));

    let tokens = [
        TokenTree::Punct(Punct::new(':', Spacing::Joint)),
        TokenTree::Punct(Punct::new(':', Spacing::Alone)),
        TokenTree::Ident(Ident::new("core", span)),
        TokenTree::Punct(Punct::new(':', Spacing::Joint)),
        TokenTree::Punct(Punct::new(':', Spacing::Alone)),
        TokenTree::Ident(Ident::new("compile_error", span)),
        TokenTree::Punct(Punct::new('!', Spacing::Alone)),
        TokenTree::Group(Group::new(Delimiter::Parenthesis, message.into())),
        TokenTree::Punct(Punct::new(';', Spacing::Alone)),
    ];

    tokens
        .into_iter()
        .map(|mut tt| {
            tt.set_span(span);
            tt
        })
        .collect()
}
