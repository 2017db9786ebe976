use std::cmp::Ordering;

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use scalars::Quantity;

use crate::cli::Comparison;

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table
}

pub fn build_units_table<Q: Quantity>() -> Table {
    let mut table = new_table();
    table.set_header(vec!["Name", "Symbol", "Scale", "Offset", ""]);
    for unit in Q::UNITS {
        table.add_row(vec![
            Cell::new(unit.name()),
            Cell::new(unit.symbol()).add_attribute(Attribute::Bold),
            Cell::new(unit.scale()).set_alignment(CellAlignment::Right),
            Cell::new(unit.offset()).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
            Cell::new(if unit.is_standard() { "standard" } else { "" }).fg(Color::Green),
        ]);
    }
    table
}

pub fn build_comparison_table(comparison: &Comparison) -> Table {
    let mut table = new_table();
    let ordering = match comparison.ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    table.set_header(vec!["Left", "", "Right", "Difference (SI)", "Exact", "Approximate"]);
    table.add_row(vec![
        Cell::new(&comparison.left).set_alignment(CellAlignment::Right),
        Cell::new(ordering).add_attribute(Attribute::Bold),
        Cell::new(&comparison.right),
        Cell::new(comparison.si_difference).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
        boolean_cell(comparison.exactly_equal),
        boolean_cell(comparison.approximately_equal),
    ]);
    table
}

fn boolean_cell(value: bool) -> Cell {
    if value { Cell::new("yes").fg(Color::Green) } else { Cell::new("no").fg(Color::Red) }
}

#[cfg(test)]
mod tests {
    use scalars::quantities::temperature::Temperature;

    use super::*;

    #[test]
    fn units_table_ok() {
        let table = build_units_table::<Temperature>();
        assert_eq!(table.row_count(), Temperature::UNITS.len());
        let rendered = table.to_string();
        assert!(rendered.contains("°C"));
        assert!(rendered.contains("273.15"));
        assert!(rendered.contains("standard"));
    }

    #[test]
    fn comparison_table_ok() {
        let comparison = Comparison {
            left: "5 m".to_owned(),
            right: "5000 mm".to_owned(),
            si_difference: 0.0,
            ordering: Ordering::Equal,
            exactly_equal: true,
            approximately_equal: true,
        };
        let rendered = build_comparison_table(&comparison).to_string();
        assert!(rendered.contains("5000 mm"));
        assert!(rendered.contains("yes"));
        assert!(!rendered.contains("no"));
    }
}
