use std::error::Error;

/// Print `error: <message>` followed by the cause chain, then exit with 1.
pub fn fail(err: &dyn Error) -> ! {
    eprintln!("{}", render_error(err));
    std::process::exit(1);
}

pub fn render_error(err: &dyn Error) -> String {
    let mut out = format!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(&format!("\n  caused by: {cause}"));
        source = cause.source();
    }
    out
}
