//! `utilkit generate` command.

use std::io::Write;

use super::{copy_to_clipboard, emit};
use crate::context::ServiceContext;
use crate::generator::{IdentifierGenerator, IdentifierRequest};
use crate::identifier::{Identifier, IdentifierFormat};
use crate::notice::Notice;

/// What, if anything, to place on the clipboard after generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    /// Copy nothing.
    None,
    /// Copy the whole batch, newline separated.
    All,
    /// Copy the identifier at this 1-based position.
    Item(usize),
}

/// Options for a `generate` run.
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    /// Layout to generate.
    pub format: IdentifierFormat,
    /// Requested quantity, validated before any generation.
    pub count: u32,
    /// Emit a JSON array instead of one identifier per line.
    pub json: bool,
    /// Clipboard action after generation.
    pub copy: CopyTarget,
}

/// Execute the `generate` command.
///
/// # Errors
///
/// Returns an error string when the count is out of range, the copy index
/// does not exist, or output cannot be written.
pub fn run(
    ctx: &ServiceContext,
    options: &GenerateOptions,
    out: &mut dyn Write,
) -> Result<(), String> {
    let request = IdentifierRequest::new(options.format, options.count).map_err(|e| e.to_string())?;
    if let CopyTarget::Item(index) = options.copy {
        if index == 0 || index > request.count() as usize {
            return Err(format!("No UUID {index} in a batch of {}", request.count()));
        }
    }

    let ids = IdentifierGenerator::from_context(ctx).generate_request(&request);

    if options.json {
        let rendered = serde_json::to_string_pretty(&ids)
            .map_err(|e| format!("Failed to render JSON: {e}"))?;
        emit(out, &rendered)?;
    } else {
        for id in &ids {
            emit(out, id.as_str())?;
        }
    }
    Notice::generated(ids.len()).show();

    copy_selection(ctx, &ids, options.copy);
    Ok(())
}

/// Copy the selected identifiers, falling back to manual selection.
fn copy_selection(ctx: &ServiceContext, ids: &[Identifier], target: CopyTarget) {
    let (text, confirmation) = match target {
        CopyTarget::None => return,
        CopyTarget::All => (batch_text(ids), "All UUIDs copied to clipboard!".to_string()),
        CopyTarget::Item(index) => (
            ids[index - 1].to_string(),
            format!("UUID {index} copied to clipboard!"),
        ),
    };

    copy_to_clipboard(
        ctx,
        &text,
        confirmation,
        "Clipboard unavailable; select the UUIDs above to copy them",
    );
}

/// Batch form used for "copy all": one identifier per line.
#[must_use]
pub fn batch_text(ids: &[Identifier]) -> String {
    ids.iter().map(Identifier::as_str).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{DateTime, Utc};

    use crate::commands::testing::CapturingClipboard;
    use crate::ports::{Clock, Entropy};

    struct EpochClock;
    impl Clock for EpochClock {
        fn now(&self) -> DateTime<Utc> {
            DateTime::from_timestamp_millis(1_700_000_000_123).unwrap()
        }
    }

    struct ZeroEntropy;
    impl Entropy for ZeroEntropy {
        fn below(&self, _bound: u64) -> u64 {
            0
        }
    }

    fn context(clipboard: CapturingClipboard) -> ServiceContext {
        ServiceContext::with_ports(Box::new(EpochClock), Box::new(ZeroEntropy), Box::new(clipboard))
    }

    fn options(format: IdentifierFormat, count: u32) -> GenerateOptions {
        GenerateOptions { format, count, json: false, copy: CopyTarget::None }
    }

    #[test]
    fn prints_one_identifier_per_line() {
        let ctx = context(CapturingClipboard::default());
        let mut out = Vec::new();
        run(&ctx, &options(IdentifierFormat::V1, 2), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "cfe5687b-018b-1000-8000-000000000000\ncfe5687b-018b-1000-8000-000000000000\n"
        );
    }

    #[test]
    fn json_output_is_an_array() {
        let ctx = context(CapturingClipboard::default());
        let mut out = Vec::new();
        let opts = GenerateOptions { json: true, ..options(IdentifierFormat::V4, 3) };
        run(&ctx, &opts, &mut out).unwrap();
        let parsed: Vec<String> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, vec!["00000000-0000-4000-8000-000000000000"; 3]);
    }

    #[test]
    fn out_of_range_count_writes_nothing() {
        let ctx = context(CapturingClipboard::default());
        let mut out = Vec::new();
        let err = run(&ctx, &options(IdentifierFormat::V4, 101), &mut out).unwrap_err();
        assert!(err.contains("between 1 and 100"));
        assert!(out.is_empty());
    }

    #[test]
    fn copy_all_sends_newline_joined_batch() {
        let clipboard = CapturingClipboard::default();
        let ctx = context(clipboard.clone());
        let opts = GenerateOptions { copy: CopyTarget::All, ..options(IdentifierFormat::V4, 2) };
        run(&ctx, &opts, &mut Vec::new()).unwrap();
        assert_eq!(
            clipboard.copied(),
            ["00000000-0000-4000-8000-000000000000\n00000000-0000-4000-8000-000000000000"]
        );
    }

    #[test]
    fn copy_item_sends_single_identifier() {
        let clipboard = CapturingClipboard::default();
        let ctx = context(clipboard.clone());
        let opts = GenerateOptions { copy: CopyTarget::Item(2), ..options(IdentifierFormat::V1, 3) };
        run(&ctx, &opts, &mut Vec::new()).unwrap();
        assert_eq!(clipboard.copied(), ["cfe5687b-018b-1000-8000-000000000000"]);
    }

    #[test]
    fn copy_item_out_of_range_fails_before_generating() {
        let clipboard = CapturingClipboard::default();
        let ctx = context(clipboard.clone());
        let mut out = Vec::new();
        for index in [0, 4] {
            let opts =
                GenerateOptions { copy: CopyTarget::Item(index), ..options(IdentifierFormat::V4, 3) };
            let err = run(&ctx, &opts, &mut out).unwrap_err();
            assert!(err.contains(&format!("No UUID {index}")));
        }
        assert!(out.is_empty());
        assert!(clipboard.copied().is_empty());
    }

    #[test]
    fn batch_text_has_no_trailing_newline() {
        let ids: Vec<Identifier> = ["00000000-0000-4000-8000-000000000000"; 2]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert!(!batch_text(&ids).ends_with('\n'));
        assert_eq!(batch_text(&ids).lines().count(), 2);
    }
}
