//! Unit tests for the render module.

use sample_data_gen::fake::ymd;
use sample_data_gen::model::{Customer, CustomerType, Money, Order, OrderStatus, PaymentStatus};
use sample_data_gen::{Dialect, Generator, Renderer, Table};

fn customer_with_quote() -> Customer {
    Customer {
        code: "CUST001".to_string(),
        name: "O'Reilly Supplies".to_string(),
        contact_name: "Sean O'Neil".to_string(),
        email: "sean@oreilly.com".to_string(),
        phone: "+1-555-1234".to_string(),
        address: "Address".to_string(),
        city: "Dublin".to_string(),
        region: "State".to_string(),
        country: "USA".to_string(),
        customer_type: CustomerType::Vip,
        credit_limit: Money::from_units(25_000_000),
        is_active: true,
    }
}

fn shipped_order() -> Order {
    let ordered = ymd(2024, 5, 3).and_hms_opt(14, 30, 5).unwrap();
    Order {
        order_number: "ORD-2024-00001".to_string(),
        customer_id: 3,
        order_date: ordered,
        required_date: ymd(2024, 5, 10).and_hms_opt(14, 30, 5).unwrap(),
        shipped_date: Some(ymd(2024, 5, 6).and_hms_opt(14, 30, 5).unwrap()),
        status: OrderStatus::Shipped,
        subtotal: Money::from_cents(123_455),
        tax: Money::from_cents(12_346),
        total: Money::from_cents(135_801),
        payment_method: "Credit Card".to_string(),
        payment_status: PaymentStatus::Paid,
        employee_id: 2,
        notes: None,
    }
}

#[test]
fn test_insert_layout() {
    let sql = Renderer::new(Dialect::MsSql).render_insert(&customer_with_quote());
    assert_eq!(
        sql,
        "INSERT INTO Customers (CustomerCode, CustomerName, ContactName, Email, Phone, Address, \
         City, Region, Country, CustomerType, CreditLimit, IsActive) VALUES ('CUST001', \
         'O''Reilly Supplies', 'Sean O''Neil', 'sean@oreilly.com', '+1-555-1234', 'Address', \
         'Dublin', 'State', 'USA', 'VIP', 25000000.00, 1);"
    );
}

#[test]
fn test_boolean_literal_per_dialect() {
    let customer = customer_with_quote();
    for dialect in Dialect::ALL {
        let sql = Renderer::new(dialect).render_insert(&customer);
        if dialect == Dialect::Postgres {
            assert!(sql.ends_with(", TRUE);"), "{}", sql);
        } else {
            assert!(sql.ends_with(", 1);"), "{}", sql);
        }
    }
}

#[test]
fn test_quotes_stay_closed() {
    let sql = Renderer::new(Dialect::Sqlite).render_insert(&customer_with_quote());
    // Every literal is balanced, so the total quote count is even
    assert_eq!(sql.matches('\'').count() % 2, 0);
    assert!(sql.contains("'O''Reilly Supplies'"));
}

#[test]
fn test_order_rendering_oracle() {
    let sql = Renderer::new(Dialect::Oracle).render_insert(&shipped_order());
    assert!(sql.contains("TO_TIMESTAMP('2024-05-03 14:30:05', 'YYYY-MM-DD HH24:MI:SS')"));
    assert!(sql.contains("TO_TIMESTAMP('2024-05-06 14:30:05', 'YYYY-MM-DD HH24:MI:SS')"));
    assert!(sql.contains("1234.55, 123.46, 1358.01"));
    assert!(sql.ends_with(", 2, NULL);"));
}

#[test]
fn test_order_rendering_mysql_plain_timestamps() {
    let sql = Renderer::new(Dialect::MySql).render_insert(&shipped_order());
    assert!(sql.contains("'2024-05-06 14:30:05'"));
    assert!(!sql.contains("TO_TIMESTAMP"));
}

#[test]
fn test_unshipped_order_renders_null() {
    let mut order = shipped_order();
    order.shipped_date = None;
    order.status = OrderStatus::Pending;
    let sql = Renderer::new(Dialect::Postgres).render_insert(&order);
    assert!(sql.contains("'2024-05-10 14:30:05', NULL, 'Pending'"));
}

#[test]
fn test_customers_scenario_mysql() {
    let data = Generator::new(1).generate(10).unwrap();
    let sql = Renderer::new(Dialect::MySql)
        .render_to_string(&data, &[Table::Customers])
        .unwrap();

    let lines: Vec<&str> = sql.lines().collect();
    assert_eq!(lines[0], "-- Customers (10 records)");
    assert_eq!(lines.len(), 11);
    for line in &lines[1..] {
        assert!(line.starts_with("INSERT INTO Customers ("));
        assert!(line.ends_with(", 1);"));
    }
    assert!(sql.ends_with(";\n"));
}

#[test]
fn test_oracle_shipped_dates_use_to_timestamp() {
    let data = Generator::new(8).generate(50).unwrap();
    let renderer = Renderer::new(Dialect::Oracle);

    let shipped: Vec<_> = data.orders.iter().filter(|o| o.shipped_date.is_some()).collect();
    assert!(!shipped.is_empty());
    for order in shipped {
        let sql = renderer.render_insert(order);
        let shipped_text = order.shipped_date.unwrap().format("%Y-%m-%d %H:%M:%S").to_string();
        assert!(sql.contains(&format!(
            "TO_TIMESTAMP('{}', 'YYYY-MM-DD HH24:MI:SS')",
            shipped_text
        )));
    }
}

#[test]
fn test_employee_dates_and_root_manager() {
    let data = Generator::new(4).generate(20).unwrap();
    let sql = Renderer::new(Dialect::Oracle)
        .render_to_string(&data, &[Table::Employees])
        .unwrap();

    let first = sql.lines().nth(1).unwrap();
    assert!(first.contains("TO_DATE('"));
    assert!(first.ends_with(", NULL, 1);"));
}

#[test]
fn test_sections_in_fixed_order() {
    let data = Generator::new(2).generate(4).unwrap();
    let sql = Renderer::new(Dialect::Sqlite)
        .render_to_string(&data, &Table::ALL)
        .unwrap();

    let headers: Vec<&str> = sql.lines().filter(|l| l.starts_with("-- ")).collect();
    assert_eq!(
        headers,
        vec![
            "-- Customers (4 records)",
            "-- Products (4 records)",
            "-- Employees (10 records)",
            "-- Orders (4 records)",
            "-- OrderDetails (8 records)",
        ]
    );
    let inserts = sql.lines().filter(|l| l.starts_with("INSERT INTO ")).count();
    assert_eq!(inserts, 4 + 4 + 10 + 4 + 8);
}

#[test]
fn test_money_always_two_decimals() {
    let data = Generator::new(6).generate(30).unwrap();
    let sql = Renderer::new(Dialect::MsSql)
        .render_to_string(&data, &[Table::OrderDetails])
        .unwrap();

    for line in sql.lines().skip(1) {
        // OrderID, ProductID, UnitPrice, Quantity, Discount
        let values = line
            .split("VALUES (")
            .nth(1)
            .unwrap()
            .trim_end_matches(");");
        let fields: Vec<&str> = values.split(", ").collect();
        assert_eq!(fields.len(), 5);
        for money in [fields[2], fields[4]] {
            let (_, cents) = money.split_once('.').unwrap();
            assert_eq!(cents.len(), 2, "{}", line);
        }
    }
}

#[test]
fn test_rendering_is_idempotent() {
    let data = Generator::new(31).generate(15).unwrap();
    for dialect in Dialect::ALL {
        let renderer = Renderer::new(dialect);
        let first = renderer.render_to_string(&data, &Table::ALL).unwrap();
        let second = renderer.render_to_string(&data, &Table::ALL).unwrap();
        assert_eq!(first, second);
    }
}
