use crate::core::{InputField, InputSet};
use crate::formatting::numbers::format_number_with;
use crate::formatting::{format_currency, FormattingConfig};
use anyhow::Result;
use comfy_table::{presets, CellAlignment, Table};

pub fn handle_fields(formatting: FormattingConfig) -> Result<()> {
    println!("{}", fields_table(formatting.emoji.should_use_emoji()));
    Ok(())
}

/// Table of every input field: flag, config key, label and default.
pub fn fields_table(unicode: bool) -> Table {
    let defaults = InputSet::default();
    let mut table = Table::new();
    table
        .load_preset(if unicode {
            presets::UTF8_FULL
        } else {
            presets::ASCII_FULL
        })
        .set_header(vec!["Flag", "Config key", "Label", "Default"]);

    for field in InputField::ALL {
        let value = defaults.get(field);
        let default = if field.is_currency() {
            format_currency(value, unicode)
        } else {
            format_number_with(value, unicode)
        };
        table.add_row(vec![
            format!("--{}", field.key()),
            field.key().replace('-', "_"),
            field.label().to_string(),
            default,
        ]);
    }

    if let Some(column) = table.column_mut(3) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}
