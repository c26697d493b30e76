//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use edgeop::error::Result;

use crate::cli::OutputFormat;

pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Pretty => table::format_table(self),
            OutputFormat::Table => table::format_plain(self),
            OutputFormat::Json => json::format_json(self)?,
        })
    }
}

/// Print a single record: key/value lines when pretty, a one-row table or
/// JSON otherwise.
pub fn print_one<T: Tabled + Serialize>(item: &T, format: OutputFormat) -> Result<()> {
    let output = match format {
        OutputFormat::Pretty => table::format_detail(item),
        OutputFormat::Table => table::format_plain(std::slice::from_ref(item)),
        OutputFormat::Json => json::format_json(item)?,
    };
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled, Serialize)]
    struct Row {
        #[tabled(rename = "ID")]
        id: String,
    }

    #[test]
    fn test_vec_format_per_output_format() {
        let rows = vec![Row {
            id: "acl-1".to_string(),
        }];

        assert!(rows.format(OutputFormat::Pretty).unwrap().contains("╭"));
        assert!(!rows.format(OutputFormat::Table).unwrap().contains("╭"));
        assert!(rows.format(OutputFormat::Json).unwrap().contains("\"id\": \"acl-1\""));
    }
}
