use crate::core::display::render_machine;
use crate::core::machine::{Purchase, VendingMachine};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const BUY_PRODUCT: u32 = 1;
const EXIT: u32 = 9;

/// Interactive customer loop: show the machine, read a menu choice, act on it.
pub struct CustomerSession<R: BufRead, W: Write> {
    machine: VendingMachine,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> CustomerSession<R, W> {
    pub fn new(machine: VendingMachine, input: R, output: W) -> Self {
        Self {
            machine,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", render_machine(&self.machine)?)?;
            writeln!(self.output, "{}. Buy product", BUY_PRODUCT)?;
            writeln!(self.output, "{}. Exit", EXIT)?;

            let Some(selection) = self.prompt("Your selection: ")? else {
                tracing::debug!("Input closed, ending session");
                return Ok(());
            };

            match selection.trim().parse::<u32>() {
                Ok(BUY_PRODUCT) => {
                    let Some(symbol) = self.prompt("Select product: ")? else {
                        return Ok(());
                    };
                    let message = describe(self.machine.buy(&symbol));
                    writeln!(self.output, "{}", message)?;
                }
                Ok(EXIT) => {
                    writeln!(self.output, "Bye")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid selection")?,
            }
        }
    }

    pub fn into_parts(self) -> (VendingMachine, W) {
        (self.machine, self.output)
    }

    /// 輸入結束時回傳 `None`
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn describe(purchase: Purchase) -> String {
    match purchase {
        Purchase::Dispensed(product) => product.name().to_string(),
        Purchase::SoldOut(_) => "Sold out".to_string(),
        Purchase::NoTray(symbol) => format!("No tray at {}", symbol),
        Purchase::MalformedSymbol(_) => "Invalid symbol".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfiguration;
    use crate::core::stocking::FixedStocking;
    use std::io::Cursor;

    fn machine() -> VendingMachine {
        let config = MapConfiguration::new()
            .with_integer("machine.size.rows", 2)
            .with_integer("machine.size.cols", 2);
        let mut stocking = FixedStocking::new()
            .with_tray("A1".parse().unwrap(), 200, ["Product A1"])
            .with_tray("A2".parse().unwrap(), 300, Vec::<String>::new());
        VendingMachine::with_stocking(&config, &mut stocking).unwrap()
    }

    fn run_session(input: &str) -> (VendingMachine, String) {
        let mut session = CustomerSession::new(machine(), Cursor::new(input.to_string()), Vec::new());
        session.run().unwrap();
        let (machine, output) = session.into_parts();
        (machine, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_buy_then_exit() {
        let (machine, output) = run_session("1\nA1\n1\nA1\n9\n");

        assert!(output.contains("1. Buy product"));
        assert!(output.contains("Select product: Product A1\n"));
        assert!(output.contains("Select product: Sold out\n"));
        assert!(output.ends_with("Bye\n"));
        assert!(machine.tray_at(0, 0).unwrap().unwrap().is_sold_out());
    }

    #[test]
    fn test_reports_missing_tray_and_bad_input() {
        let (_, output) = run_session("1\nB2\n1\nxyz\n7\nabc\n9\n");

        assert!(output.contains("No tray at B2"));
        assert!(output.contains("Invalid symbol"));
        assert_eq!(output.matches("Invalid selection").count(), 2);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (_, output) = run_session("1\n");
        assert!(output.ends_with("Select product: "));

        let (_, output) = run_session("");
        assert!(output.ends_with("Your selection: "));
    }
}
