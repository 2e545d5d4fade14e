//! Output formatting.

pub mod pretty;

use serde::Serialize;

use crate::cli::OutputFormat;
use pretty::Pretty;

/// Render a value in the requested format.
pub fn render<T: Serialize + Pretty + ?Sized>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(value).unwrap_or_default(),
        OutputFormat::Pretty => value.pretty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopdb_core::model::UserProfile;

    #[test]
    fn test_render_json_is_compact_camel_case() {
        let user = UserProfile::new("alice", "Alice A", "a@x.com");
        assert_eq!(
            render(&user, OutputFormat::Json),
            r#"{"username":"alice","fullName":"Alice A","email":"a@x.com","addresses":[]}"#
        );
    }
}
