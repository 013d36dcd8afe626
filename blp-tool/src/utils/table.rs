//! Table formatting utilities

use super::format::format_bytes;
use blp_texture::MipmapInfo;
use prettytable::{Cell, Row, Table};

/// Create a table with bold headers
pub fn create_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_format(*prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(Row::new(
        headers
            .iter()
            .map(|h| Cell::new(h).style_spec("b"))
            .collect(),
    ));
    table
}

/// One row per stored mip level
pub fn mipmap_table(levels: &[MipmapInfo]) -> Table {
    let mut table = create_table(&["Level", "Dimensions", "Offset", "Size", "Pixels"]);
    for info in levels {
        table.add_row(Row::new(vec![
            Cell::new(&info.level.to_string()),
            Cell::new(&format!("{}x{}", info.width, info.height)),
            Cell::new(&format!("0x{:08X}", info.offset)),
            Cell::new(&format_bytes(u64::from(info.size))),
            Cell::new(&(u64::from(info.width) * u64::from(info.height)).to_string()),
        ]));
    }
    table
}
