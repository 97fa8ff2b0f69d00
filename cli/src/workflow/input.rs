use anyhow::{bail, Context};
use hscore::interface::MatrixDocument;
use std::fs;
use std::path::Path;

/// Reads a matrix file: `.json` as a [`MatrixDocument`], anything else as delimited text.
pub fn load_document<P: AsRef<Path>>(path: P) -> anyhow::Result<MatrixDocument> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading matrix {}", path_ref.display()))?;

    let is_json = path_ref
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        MatrixDocument::from_json_str(&contents)
            .with_context(|| format!("parsing matrix {}", path_ref.display()))
    } else {
        let rows = parse_delimited(&contents)
            .with_context(|| format!("parsing matrix {}", path_ref.display()))?;
        Ok(MatrixDocument::new(rows))
    }
}

/// One row per line; values split on commas, tabs or spaces. Blank and `#` lines are skipped.
pub fn parse_delimited(contents: &str) -> anyhow::Result<Vec<Vec<f64>>> {
    let mut rows = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let row = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty())
            .map(|field| {
                field
                    .parse::<f64>()
                    .with_context(|| format!("line {}: bad value {:?}", line_no + 1, field))
            })
            .collect::<anyhow::Result<Vec<f64>>>()?;
        rows.push(row);
    }

    if rows.is_empty() {
        bail!("no rows found");
    }
    Ok(rows)
}
