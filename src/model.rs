//! Generated record types.
//!
//! Records carry no surrogate keys. A record's identity is its 1-based
//! position in the generated sequence, and references between tables
//! (`customer_id`, `reports_to`, ...) are such positions.

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use std::ops::Add;

/// Currency amount stored as whole cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub fn from_units(units: i64) -> Self {
        Money(units * 100)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    /// `pct` percent of this amount, rounded half away from zero to the cent
    pub fn percent(self, pct: i64) -> Money {
        let scaled = self.0 * pct;
        let quotient = scaled / 100;
        let remainder = scaled % 100;
        if remainder.abs() * 2 >= 100 {
            Money(quotient + scaled.signum())
        } else {
            Money(quotient)
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

/// Always two decimal places: `1234.50`, `0.05`, `-3.00`
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// Which reference pool a record was drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Korean,
    English,
}

impl Locale {
    /// The first `ceil(total / 2)` positions are Korean, the rest English
    pub fn for_index(index: usize, total: usize) -> Locale {
        if index < total.div_ceil(2) {
            Locale::Korean
        } else {
            Locale::English
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerType {
    Premium,
    Regular,
    Vip,
}

impl CustomerType {
    pub const ALL: [CustomerType; 3] = [
        CustomerType::Premium,
        CustomerType::Regular,
        CustomerType::Vip,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CustomerType::Premium => "Premium",
            CustomerType::Regular => "Regular",
            CustomerType::Vip => "VIP",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Pending,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub code: String,
    pub name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub customer_type: CustomerType,
    pub credit_limit: Money,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub code: String,
    pub name: String,
    pub category: String,
    pub unit_price: Money,
    pub units_in_stock: u32,
    pub units_on_order: u32,
    pub reorder_level: u32,
    pub discontinued: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub birth_date: NaiveDate,
    pub hire_date: NaiveDate,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub salary: Money,
    /// Position of an earlier employee, `None` for the root of a chain
    pub reports_to: Option<usize>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_number: String,
    pub customer_id: usize,
    pub order_date: NaiveDateTime,
    pub required_date: NaiveDateTime,
    pub shipped_date: Option<NaiveDateTime>,
    pub status: OrderStatus,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
    pub payment_method: String,
    pub payment_status: PaymentStatus,
    pub employee_id: usize,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetail {
    pub order_id: usize,
    pub product_id: usize,
    pub unit_price: Money,
    pub quantity: u32,
    pub discount: Money,
}
