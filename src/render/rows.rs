//! Column values for each record type.

use super::{Record, SqlValue};
use crate::model::{Customer, Employee, Order, OrderDetail, Product};
use crate::table::Table;

fn text(s: &str) -> SqlValue {
    SqlValue::Text(s.to_string())
}

impl Record for Customer {
    const TABLE: Table = Table::Customers;

    fn values(&self) -> Vec<SqlValue> {
        vec![
            text(&self.code),
            text(&self.name),
            text(&self.contact_name),
            text(&self.email),
            text(&self.phone),
            text(&self.address),
            text(&self.city),
            text(&self.region),
            text(&self.country),
            text(self.customer_type.as_str()),
            SqlValue::Money(self.credit_limit),
            SqlValue::Bool(self.is_active),
        ]
    }
}

impl Record for Product {
    const TABLE: Table = Table::Products;

    fn values(&self) -> Vec<SqlValue> {
        vec![
            text(&self.code),
            text(&self.name),
            text(&self.category),
            SqlValue::Money(self.unit_price),
            SqlValue::Int(self.units_in_stock.into()),
            SqlValue::Int(self.units_on_order.into()),
            SqlValue::Int(self.reorder_level.into()),
            SqlValue::Bool(self.discontinued),
            SqlValue::opt_text(self.description.as_deref()),
        ]
    }
}

impl Record for Employee {
    const TABLE: Table = Table::Employees;

    fn values(&self) -> Vec<SqlValue> {
        vec![
            text(&self.code),
            text(&self.first_name),
            text(&self.last_name),
            text(&self.title),
            SqlValue::Date(self.birth_date),
            SqlValue::Date(self.hire_date),
            text(&self.email),
            text(&self.phone),
            text(&self.department),
            SqlValue::Money(self.salary),
            SqlValue::opt_ordinal(self.reports_to),
            SqlValue::Bool(self.is_active),
        ]
    }
}

impl Record for Order {
    const TABLE: Table = Table::Orders;

    fn values(&self) -> Vec<SqlValue> {
        vec![
            text(&self.order_number),
            SqlValue::ordinal(self.customer_id),
            SqlValue::Timestamp(self.order_date),
            SqlValue::Timestamp(self.required_date),
            SqlValue::opt_timestamp(self.shipped_date),
            text(self.status.as_str()),
            SqlValue::Money(self.subtotal),
            SqlValue::Money(self.tax),
            SqlValue::Money(self.total),
            text(&self.payment_method),
            text(self.payment_status.as_str()),
            SqlValue::ordinal(self.employee_id),
            SqlValue::opt_text(self.notes.as_deref()),
        ]
    }
}

impl Record for OrderDetail {
    const TABLE: Table = Table::OrderDetails;

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::ordinal(self.order_id),
            SqlValue::ordinal(self.product_id),
            SqlValue::Money(self.unit_price),
            SqlValue::Int(self.quantity.into()),
            SqlValue::Money(self.discount),
        ]
    }
}
