use crate::builder::{Body, Report};
use crate::classify::definition_ref;
use crate::error::{ClassificationError, Error, Result};

/// Append one declaration's transcript: name, inheritance notes, body, blank line.
pub fn write_report(out: &mut String, report: &Report<'_>) -> Result<()> {
    push_line(out, report.name);
    for base in &report.inherits {
        push_line(out, &format!("+--> {base}"));
    }
    match &report.body {
        Body::ArrayOf(element) => {
            push_line(out, &format!("Array of '{}'", definition_ref(element)));
        }
        Body::Schema(schema) => {
            let json = schema.to_pretty_json().map_err(|cause| Error::Render {
                name: report.name.to_owned(),
                cause,
            })?;
            push_line(out, &json);
        }
        Body::Empty => {}
    }
    out.push('\n');
    Ok(())
}

/// Render a whole run. Stops at the first error, discarding what was rendered.
pub fn transcript<'a, I>(reports: I) -> Result<String>
where
    I: IntoIterator<Item = Result<Report<'a>, ClassificationError>>,
{
    let mut out = String::new();
    for report in reports {
        write_report(&mut out, &report?)?;
    }
    Ok(out)
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
