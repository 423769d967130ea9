use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use sass_build_core::CompilerOptions;

/// Print the resolved render options, one row per set field.
pub fn print_options(options: &CompilerOptions) {
    println!("--- render_options ---");
    println!("{}", options_table(options));
}

pub fn options_table(options: &CompilerOptions) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Option"), header_cell("Value")]);
    apply_table_style(&mut table);
    for (name, value) in options.entries() {
        table.add_row(vec![Cell::new(name), Cell::new(value)]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
