//! Table rendering for record lists, record detail, and verify output.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use patedu_content::VerifySummary;
use patedu_model::{BedsideScreeningEntry, Language, ProcedureEntry};

pub fn print_procedure_list(entries: &[&ProcedureEntry], lang: Language) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Category"),
        header_cell("Complexity"),
        header_cell("Specialties"),
    ]);
    apply_list_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    for entry in entries {
        table.add_row(vec![
            id_cell(entry.id),
            Cell::new(entry.localized_name(lang)),
            Cell::new(entry.category.as_str()),
            complexity_cell(entry.complexity.rank()),
            Cell::new(entry.specialties.join(", ")),
        ]);
    }
    println!("{table}");
}

pub fn print_bedside_screening_list(entries: &[&BedsideScreeningEntry], lang: Language) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Category"),
        header_cell("Complexity"),
        header_cell("Specialties"),
    ]);
    apply_list_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    for entry in entries {
        table.add_row(vec![
            id_cell(entry.id),
            Cell::new(entry.localized_name(lang)),
            Cell::new(entry.category.as_str()),
            complexity_cell(entry.complexity.rank()),
            Cell::new(entry.specialties.join(", ")),
        ]);
    }
    println!("{table}");
}

pub fn print_procedure_detail(entry: &ProcedureEntry, lang: Language) {
    let mut table = Table::new();
    apply_detail_table_style(&mut table);
    add_detail_row(&mut table, "Id", entry.id);
    add_detail_row(&mut table, "Name", entry.localized_name(lang));
    match lang {
        Language::English => add_detail_row(&mut table, "Spanish name", entry.spanish_name),
        Language::Spanish => add_detail_row(&mut table, "English name", entry.name),
    }
    add_detail_row(&mut table, "Category", entry.category.as_str());
    add_detail_row(&mut table, "Complexity", entry.complexity.as_str());
    add_detail_row(&mut table, "Specialties", &entry.specialties.join(", "));
    add_detail_row(&mut table, "Body regions", &entry.body_regions.join(", "));
    add_detail_row(&mut table, "Settings", &join_display(entry.settings));
    add_detail_row(&mut table, "Anesthesia", &join_display(entry.anesthesia));
    add_detail_row(&mut table, "Description", entry.description);
    add_detail_row(&mut table, "What to expect", entry.what_to_expect);
    add_detail_row(&mut table, "Patient explanation", entry.patient_explanation);
    println!("{table}");
}

pub fn print_bedside_screening_detail(entry: &BedsideScreeningEntry, lang: Language) {
    let mut table = Table::new();
    apply_detail_table_style(&mut table);
    add_detail_row(&mut table, "Id", entry.id);
    add_detail_row(&mut table, "Name", entry.localized_name(lang));
    add_detail_row(&mut table, "Category", entry.category.as_str());
    add_detail_row(&mut table, "Complexity", entry.complexity.as_str());
    add_detail_row(&mut table, "Specialties", &entry.specialties.join(", "));
    add_detail_row(&mut table, "Description", entry.localized_description(lang));
    add_detail_row(
        &mut table,
        "Patient explanation",
        entry.localized_patient_explanation(lang),
    );
    add_detail_row(&mut table, "Preparation", entry.localized_preparation(lang));
    add_detail_row(
        &mut table,
        "What to expect",
        entry.localized_what_to_expect(lang),
    );
    add_detail_row(&mut table, "Risks", entry.localized_risks(lang));
    add_detail_row(&mut table, "Follow-up", entry.localized_follow_up(lang));
    println!("{table}");
}

pub fn print_verify_summary(summary: &VerifySummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Store"), header_cell("Records")]);
    apply_list_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (category, count) in &summary.procedure_counts_by_category {
        table.add_row(vec![
            Cell::new(format!("procedures/{category}")),
            count_cell(*count),
        ]);
    }
    table.add_row(vec![
        Cell::new("bedside-screening/bedside"),
        count_cell(summary.bedside_count),
    ]);
    table.add_row(vec![
        Cell::new("bedside-screening/screening"),
        count_cell(summary.screening_count),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.procedure_count + summary.bedside_screening_count)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn id_cell(id: &str) -> Cell {
    Cell::new(id).fg(Color::Green)
}

fn complexity_cell(rank: u8) -> Cell {
    match rank {
        1 | 2 => Cell::new(rank),
        3 => Cell::new(rank).fg(Color::Yellow),
        _ => Cell::new(rank).fg(Color::Red),
    }
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count)
    }
}

fn add_detail_row(table: &mut Table, label: &str, value: &str) {
    table.add_row(vec![
        Cell::new(label)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(value),
    ]);
}

fn join_display<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn apply_list_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_detail_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(20)),
        ColumnConstraint::UpperBoundary(Width::Percentage(75)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
