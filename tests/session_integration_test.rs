use anyhow::Result;
use std::io::Cursor;
use vending_machine::{CustomerSession, FixedStocking, MapConfiguration, VendingMachine};

#[test]
fn test_customer_buys_both_products_in_order() -> Result<()> {
    let config = MapConfiguration::new()
        .with_integer("machine.size.rows", 1)
        .with_integer("machine.size.cols", 1);
    let mut stocking = FixedStocking::new().with_tray("A1".parse()?, 450, ["Water", "Juice"]);
    let machine = VendingMachine::with_stocking(&config, &mut stocking)?;

    let input = Cursor::new("1\nA1\n1\na1\n1\nA1\n9\n");
    let mut session = CustomerSession::new(machine, input, Vec::new());
    session.run()?;

    let (machine, output) = session.into_parts();
    let output = String::from_utf8(output)?;

    let water = output.find("Select product: Water").expect("water sold");
    let juice = output.find("Select product: Juice").expect("juice sold");
    assert!(water < juice);
    assert!(output.contains("Select product: Sold out"));
    // 第一次畫面顯示 Water 與價格
    assert!(output.contains("|    Water   |"));
    assert!(output.contains("|    4,50    |"));
    assert!(machine.tray_at(0, 0)?.is_some());
    Ok(())
}
