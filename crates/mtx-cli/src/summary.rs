use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mtx_model::AnnotatedSample;

use crate::types::AnalyzeResult;

pub fn print_summary(result: &AnalyzeResult) {
    println!("Patients with concentration samples: {}", result.output.patient_count);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Patient"),
        header_cell("Samples"),
        header_cell("Episodes"),
        header_cell("DME episodes"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for patient in &result.patients {
        table.add_row(vec![
            Cell::new(&patient.patient_id),
            Cell::new(patient.sample_count),
            Cell::new(patient.episode_count),
            dme_count_cell(patient.dme_episode_count),
        ]);
    }
    println!("{table}");

    if !result.output.has_detections() {
        // A valid terminal outcome, not a fault
        println!("No DME detected.");
    } else {
        println!(
            "DME-positive patients ({}), most flagged measurements first:",
            result.output.dme_patients.len()
        );
        for patient_id in &result.output.dme_patients {
            println!("- {patient_id}");
        }
        for patient in &result.patients {
            if patient.needs_single_episode_warning() {
                println!(
                    "Warning: patient {} has one long episode; it may be an \
                     unsegmented mix of treatments",
                    patient.patient_id
                );
            }
        }
    }

    for path in &result.written {
        println!("Wrote {}", path.display());
    }
}

pub fn print_preview(samples: &[AnnotatedSample], rows: usize) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Patient"),
        header_cell("Sample time"),
        header_cell("Episode"),
        header_cell("Hour offset"),
        header_cell("Result"),
        header_cell("DME"),
    ]);
    apply_table_style(&mut table);
    for sample in samples.iter().take(rows) {
        table.add_row(vec![
            Cell::new(&sample.patient_id),
            Cell::new(sample.sample_time),
            Cell::new(sample.episode_id),
            Cell::new(format!("{:.1}", sample.hour_offset)),
            Cell::new(sample.result),
            dme_flag_cell(sample.dme_positive),
        ]);
    }
    println!("{table}");
    if samples.len() > rows {
        println!("... {} more rows", samples.len() - rows);
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dme_count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn dme_flag_cell(positive: bool) -> Cell {
    if positive {
        Cell::new("yes").fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new("no").fg(Color::DarkGrey)
    }
}
