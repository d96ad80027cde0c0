use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Attribute, Cell, Color, Table, presets::UTF8_BORDERS_ONLY};

use crate::types::ImageMatch;

pub fn print_table(matches: &[ImageMatch], hide_description: bool) -> Result<()> {
    if matches.is_empty() {
        println!("公式イメージに一致する依存関係は見つかりませんでした。");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    let mut header = vec![Cell::new("Image").add_attribute(Attribute::Bold)];
    if !hide_description {
        header.push(Cell::new("Description").add_attribute(Attribute::Bold));
    }
    table.set_header(header);

    for image in matches {
        let mut row = vec![
            Cell::new(image.name.clone())
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ];
        if !hide_description {
            row.push(description_cell(&image.description));
        }
        table.add_row(row);
    }

    println!("{table}");
    Ok(())
}

fn description_cell(description: &str) -> Cell {
    if description.is_empty() {
        Cell::new("-").fg(Color::Yellow)
    } else {
        Cell::new(shorten_description(description))
    }
}

fn shorten_description(description: &str) -> String {
    const MAX_CHARS: usize = 60;
    let mut buf = String::new();
    for (idx, ch) in description.chars().enumerate() {
        if idx >= MAX_CHARS {
            buf.push_str("...");
            return buf;
        }
        buf.push(ch);
    }
    buf
}

pub fn output_json(
    matches: &[ImageMatch],
    print_json: bool,
    output_path: Option<&Path>,
) -> Result<()> {
    if !print_json && output_path.is_none() {
        return Ok(());
    }

    let json = serde_json::to_string_pretty(matches)?;
    if let Some(path) = output_path {
        fs::write(path, &json)
            .with_context(|| format!("JSONファイルの書き込みに失敗: {}", path.display()))?;
        println!("JSONを{}に書き出しました。", path.display());
    }

    if print_json {
        println!("JSON出力:\n{json}");
    }
    Ok(())
}
