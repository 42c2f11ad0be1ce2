//! Insert rendered accessors into the source they were expanded from.

use std::ops::Range;

use vft_core::CoreError;

/// Rendered accessors for one annotated declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    /// Byte range of the annotated declaration; accessors go after its end.
    pub declaration: Range<usize>,
    /// Byte range of the annotation attribute, removed when present.
    pub annotation: Option<Range<usize>>,
    /// Leading whitespace of the declaration's first line.
    pub indentation: String,
    pub rendered: Vec<String>,
}

struct Edit {
    range: Range<usize>,
    replacement: String,
}

/// Apply all insertions to `source`.
///
/// Each accessor is placed after its declaration, separated by a blank line
/// and indented like the declaration. Removing an annotation also swallows
/// the whitespace that follows it, so the declaration keeps its position.
///
/// # Errors
/// Returns `CoreError::Validation` if a range is out of bounds, splits a
/// character, or two edits overlap.
pub fn splice(source: &str, insertions: &[Insertion]) -> Result<String, CoreError> {
    let mut edits = Vec::new();
    for insertion in insertions {
        check_range(source, &insertion.declaration)?;
        if let Some(annotation) = &insertion.annotation {
            check_range(source, annotation)?;
            let trailing = source[annotation.end..]
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(source.len() - annotation.end);
            edits.push(Edit {
                range: annotation.start..annotation.end + trailing,
                replacement: String::new(),
            });
        }

        let block = insertion_block(&insertion.indentation, &insertion.rendered);
        if !block.is_empty() {
            let end = insertion.declaration.end;
            edits.push(Edit {
                range: end..end,
                replacement: block,
            });
        }
    }

    edits.sort_by_key(|edit| (edit.range.start, edit.range.end));

    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;
    for edit in edits {
        if edit.range.start < cursor {
            return Err(CoreError::Validation(format!(
                "overlapping edits at byte {}",
                edit.range.start
            )));
        }
        output.push_str(&source[cursor..edit.range.start]);
        output.push_str(&edit.replacement);
        cursor = edit.range.end;
    }
    output.push_str(&source[cursor..]);
    Ok(output)
}

fn check_range(source: &str, range: &Range<usize>) -> Result<(), CoreError> {
    if range.start > range.end || range.end > source.len() {
        return Err(CoreError::Validation(format!(
            "range {}..{} outside source of {} bytes",
            range.start,
            range.end,
            source.len()
        )));
    }
    if !source.is_char_boundary(range.start) || !source.is_char_boundary(range.end) {
        return Err(CoreError::Validation(format!(
            "range {}..{} splits a character",
            range.start, range.end
        )));
    }
    Ok(())
}

fn insertion_block(indentation: &str, rendered: &[String]) -> String {
    let mut block = String::new();
    for text in rendered {
        block.push_str("\n\n");
        let indented = text
            .lines()
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("{indentation}{line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        block.push_str(&indented);
    }
    block
}
