mod formatter;

pub use formatter::{
    format_open_outcome, format_results, format_search_error, get_terminal_width, should_use_colors,
    NO_SNIPPET_PLACEHOLDER,
};
