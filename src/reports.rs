use bootforge::keymap::{KeymapTable, LAYER_SIZE, SHIFT_OFFSET, SPECIAL_OFFSET};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};

pub fn print_keymap_grids(table: &KeymapTable) {
    let bytes = table.as_bytes();
    print_layer_grid("normal", &bytes[..LAYER_SIZE]);
    print_layer_grid("shift", &bytes[SHIFT_OFFSET..SPECIAL_OFFSET]);
    print_layer_grid("special", &bytes[SPECIAL_OFFSET..]);
}

// 16 cells per row, so row/column indices read as the scancode's hex digits.
fn print_layer_grid(name: &str, bytes: &[u8]) {
    println!("\nLayer: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let cols = 16;

    for chunk in bytes.chunks(cols) {
        let cells: Vec<Cell> = chunk
            .iter()
            .map(|&b| {
                let s = if b == 0 {
                    " ".to_string()
                } else if (0x20..0x7F).contains(&b) {
                    (b as char).to_string()
                } else {
                    format!("{:02X}", b)
                };
                Cell::new(s).set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}
