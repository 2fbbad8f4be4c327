/// Render a message template, substituting `key = value` pairs.
///
/// ```
/// use hlsclt_messages::{msg, MESSAGES};
///
/// let text = msg!(MESSAGES.report.opener_failed, path = "a.rpt", opener = "xdg-open");
/// assert_eq!(text, "Failed to open a.rpt with xdg-open");
/// ```
#[macro_export]
macro_rules! msg {
    ($template:expr) => {
        $crate::builder::MessageBuilder::new($template).build()
    };
    ($template:expr, $($key:ident = $value:expr),+ $(,)?) => {
        {
            let mut builder = $crate::builder::MessageBuilder::new($template);
            $(
                builder = builder.var(stringify!($key), $value.to_string());
            )+
            builder.build()
        }
    };
}
