use proc_macro::{Span, TokenStream};

mod output;
mod parser;

/// An error raised while expanding the macro.
pub(crate) struct Error {
    span: Span,
    message: String,
}

impl Error {
    pub(crate) fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// Configurable macro code to build entry.
pub(crate) fn build(args: TokenStream, item_stream: TokenStream) -> TokenStream {
    let mut errors = Vec::new();

    let config = parser::ConfigParser::new(args, &mut errors).parse();
    config.validate(&mut errors);

    let item = parser::ItemParser::new(item_stream.clone()).parse();
    item.validate(&mut errors);

    let mut stream = TokenStream::new();

    if errors.is_empty() {
        stream.extend(item.expand(&config, item_stream));
    } else {
        stream.extend(item_stream);
    }

    for error in errors {
        stream.extend(output::compile_error(error.span, &error.message));
    }

    stream
}
