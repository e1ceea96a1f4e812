use crate::core::machine::VendingMachine;
use crate::utils::error::Result;
use crate::utils::text::{adjust_text, format_money};
use std::fmt::Write;

pub const CELL_WIDTH: usize = 12;
const PLACEHOLDER: &str = "--";

/// Renders the grid as text. Each row takes five lines: top border, symbol,
/// first product name, price and bottom border.
pub fn render_machine(machine: &VendingMachine) -> Result<String> {
    let border = format!("+{}+", "-".repeat(CELL_WIDTH));
    let mut output = String::new();

    for row in 0..machine.rows() {
        let mut symbols = String::new();
        let mut names = String::new();
        let mut prices = String::new();

        for col in 0..machine.cols() {
            let tray = machine.tray_at(row, col)?;

            let symbol = tray
                .map(|tray| tray.symbol().to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string());
            let name = machine
                .first_product_name_at(row, col)?
                .unwrap_or(PLACEHOLDER);
            // 沒有托盤時顯示 0,00
            let price = format_money(tray.map(|tray| tray.price()).unwrap_or(0));

            push_cell(&mut symbols, &symbol);
            push_cell(&mut names, name);
            push_cell(&mut prices, &price);
        }

        let borders = border.repeat(machine.cols());
        for line in [&borders, &symbols, &names, &prices, &borders] {
            // 寫入 String 不會失敗
            let _ = writeln!(output, "{}", line);
        }
    }

    Ok(output)
}

fn push_cell(line: &mut String, text: &str) {
    line.push('|');
    line.push_str(&adjust_text(text, CELL_WIDTH));
    line.push('|');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfiguration;
    use crate::core::stocking::FixedStocking;

    #[test]
    fn test_render_machine() {
        let config = MapConfiguration::new()
            .with_integer("machine.size.rows", 1)
            .with_integer("machine.size.cols", 3);
        let mut stocking = FixedStocking::new()
            .with_tray("A1".parse().unwrap(), 250, ["Cola"])
            .with_tray("A2".parse().unwrap(), 123456, Vec::<String>::new());
        let machine = VendingMachine::with_stocking(&config, &mut stocking).unwrap();

        let rendered = render_machine(&machine).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "+------------++------------++------------+");
        assert_eq!(lines[1], "|     A1     ||     A2     ||     --     |");
        assert_eq!(lines[2], "|    Cola    ||     --     ||     --     |");
        assert_eq!(lines[3], "|    2,50    ||  1 234,56  ||    0,00    |");
        assert_eq!(lines[4], lines[0]);
    }

    #[test]
    fn test_render_truncates_long_product_names() {
        let config = MapConfiguration::new()
            .with_integer("machine.size.rows", 2)
            .with_integer("machine.size.cols", 1);
        let mut stocking =
            FixedStocking::new().with_tray("B1".parse().unwrap(), 100, ["Extra Large Chocolate"]);
        let machine = VendingMachine::with_stocking(&config, &mut stocking).unwrap();

        let rendered = render_machine(&machine).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[7], "|Extra Large |");
    }
}
