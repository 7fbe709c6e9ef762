//! Data generator that produces the record sets for all five tables.
//!
//! Generation is deterministic for a given seed. All five sets are always
//! produced so that ordinal references resolve even when only a subset of
//! tables is rendered.

use crate::fake::{self, FakeData};
use crate::model::{
    Customer, CustomerType, Employee, Locale, Money, Order, OrderDetail, OrderStatus,
    PaymentStatus, Product,
};
use crate::table::Table;
use chrono::{NaiveDateTime, NaiveTime};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Largest accepted nominal row count
///
/// Keeps every derived table size (order lines are `2 * rows`) far from
/// allocation and arithmetic limits.
pub const MAX_ROWS: usize = 100_000;
/// Upper bound on generated employees and orders
pub const MAX_DERIVED_ROWS: usize = 100;
/// Lower bound on generated employees
pub const MIN_EMPLOYEES: usize = 10;

/// Probability that an order has not shipped yet
const UNSHIPPED_PROBABILITY: f64 = 0.3;
/// Probability that an order carries no notes
const NO_NOTES_PROBABILITY: f64 = 0.8;
/// Tax rate applied to order subtotals, in percent
const TAX_PERCENT: i64 = 10;

/// Check a nominal row count against `1..=MAX_ROWS`.
///
/// `source` names where the value came from and leads the error message.
pub fn validate_rows(rows: usize, source: &str) -> anyhow::Result<()> {
    if rows == 0 {
        anyhow::bail!("{} must be greater than 0", source);
    }
    if rows > MAX_ROWS {
        anyhow::bail!("{} must be at most {}, got {}", source, MAX_ROWS, rows);
    }
    Ok(())
}

/// Number of customers for a nominal row count
pub fn customer_count(rows: usize) -> usize {
    rows
}

/// Number of products for a nominal row count
pub fn product_count(rows: usize) -> usize {
    rows
}

/// Number of employees: half the rows, kept within `10..=100`
pub fn employee_count(rows: usize) -> usize {
    (rows / 2).clamp(MIN_EMPLOYEES, MAX_DERIVED_ROWS)
}

/// Number of orders: the rows, capped at 100
pub fn order_count(rows: usize) -> usize {
    rows.min(MAX_DERIVED_ROWS)
}

/// Number of order lines: two per nominal row
pub fn order_detail_count(rows: usize) -> usize {
    rows * 2
}

/// All generated record sets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedData {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub employees: Vec<Employee>,
    pub orders: Vec<Order>,
    pub order_details: Vec<OrderDetail>,
}

impl GeneratedData {
    /// Number of records generated for a table
    pub fn count(&self, table: Table) -> usize {
        match table {
            Table::Customers => self.customers.len(),
            Table::Products => self.products.len(),
            Table::Employees => self.employees.len(),
            Table::Orders => self.orders.len(),
            Table::OrderDetails => self.order_details.len(),
        }
    }
}

/// Main data generator
pub struct Generator<R: Rng = ChaCha8Rng> {
    fake: FakeData<R>,
}

impl Generator<ChaCha8Rng> {
    /// Generator backed by a ChaCha8 stream seeded from `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Generator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            fake: FakeData::new(rng),
        }
    }

    /// Generate every table for a nominal row count.
    ///
    /// Row counts outside `1..=MAX_ROWS` are rejected.
    pub fn generate(&mut self, rows: usize) -> anyhow::Result<GeneratedData> {
        validate_rows(rows, "row count")?;

        let customers = self.customers(customer_count(rows));
        let products = self.products(product_count(rows));
        let employees = self.employees(employee_count(rows));
        let orders = self.orders(order_count(rows), customers.len(), employees.len())?;
        let order_details =
            self.order_details(order_detail_count(rows), orders.len(), products.len())?;

        Ok(GeneratedData {
            customers,
            products,
            employees,
            orders,
            order_details,
        })
    }

    /// Customers, Korean pool first then English, cycling each pool
    pub fn customers(&mut self, count: usize) -> Vec<Customer> {
        let korean_count = count.div_ceil(2);
        (0..count)
            .map(|i| match Locale::for_index(i, count) {
                Locale::Korean => self.korean_customer(i, i),
                Locale::English => self.english_customer(i, i - korean_count),
            })
            .collect()
    }

    fn korean_customer(&mut self, position: usize, slot: usize) -> Customer {
        let pool_index = slot % fake::KOREAN_COMPANIES.len();
        let company = fake::KOREAN_COMPANIES[pool_index];
        let contact = fake::KOREAN_NAMES[slot % fake::KOREAN_NAMES.len()];

        let name = if pool_index < fake::KOREAN_CORPORATE_PREFIX_COUNT {
            format!("{}{}", fake::KOREAN_CORPORATE_PREFIX, company)
        } else {
            company.to_string()
        };
        let email = format!(
            "{}@{}.co.kr",
            strip_spaces_lower(contact),
            strip_spaces_lower(company)
        );
        let phone = format!("02-{}-{}", self.fake.digits4(), self.fake.digits4());

        Customer {
            code: format!("CUST{:03}", position + 1),
            name,
            contact_name: contact.to_string(),
            email,
            phone,
            address: "서울시 강남구".to_string(),
            city: fake::KOREAN_CITIES[slot % fake::KOREAN_CITIES.len()].to_string(),
            region: fake::KOREAN_REGIONS[slot % fake::KOREAN_REGIONS.len()].to_string(),
            country: "대한민국".to_string(),
            customer_type: *self.fake.pick(&CustomerType::ALL),
            credit_limit: Money::from_units(self.fake.int_range(150, 2000) * 100_000),
            is_active: true,
        }
    }

    fn english_customer(&mut self, position: usize, slot: usize) -> Customer {
        let company = fake::ENGLISH_COMPANIES[slot % fake::ENGLISH_COMPANIES.len()];
        let contact = fake::ENGLISH_NAMES[slot % fake::ENGLISH_NAMES.len()];

        let email = format!(
            "{}@{}.com",
            first_word_lower(contact),
            first_word_lower(company)
        );
        let phone = format!("+1-555-{}", self.fake.digits4());

        Customer {
            code: format!("CUST{:03}", position + 1),
            name: company.to_string(),
            contact_name: contact.to_string(),
            email,
            phone,
            address: "Address".to_string(),
            city: fake::ENGLISH_CITIES[slot % fake::ENGLISH_CITIES.len()].to_string(),
            region: "State".to_string(),
            country: "USA".to_string(),
            customer_type: *self.fake.pick(&CustomerType::ALL),
            credit_limit: Money::from_units(self.fake.int_range(200, 2500) * 100_000),
            is_active: true,
        }
    }

    /// Products, Korean pool first then English
    pub fn products(&mut self, count: usize) -> Vec<Product> {
        let korean_count = count.div_ceil(2);
        (0..count)
            .map(|i| {
                let (name, category) = match Locale::for_index(i, count) {
                    Locale::Korean => fake::KOREAN_PRODUCTS[i % fake::KOREAN_PRODUCTS.len()],
                    Locale::English => {
                        fake::ENGLISH_PRODUCTS[(i - korean_count) % fake::ENGLISH_PRODUCTS.len()]
                    }
                };
                Product {
                    code: format!("PROD{:03}", i + 1),
                    name: name.to_string(),
                    category: category.to_string(),
                    unit_price: self.fake.price(10, 2000),
                    units_in_stock: self.fake.count_range(0, 500),
                    units_on_order: self.fake.count_range(0, 100),
                    reorder_level: self.fake.count_range(5, 50),
                    discontinued: false,
                    description: None,
                }
            })
            .collect()
    }

    /// Employees forming a reporting forest rooted at the first employee
    pub fn employees(&mut self, count: usize) -> Vec<Employee> {
        let birth_start = fake::ymd(1960, 1, 1);
        let birth_end = fake::ymd(2000, 12, 31);
        let hire_start = fake::ymd(2010, 1, 1);
        let hire_end = fake::ymd(2024, 12, 31);

        (0..count)
            .map(|i| {
                let position = i + 1;
                let code = format!("EMP{:03}", position);

                let (first_name, last_name, title, department, email, phone) =
                    match Locale::for_index(i, count) {
                        Locale::Korean => {
                            let last = *self.fake.pick(fake::KOREAN_SURNAMES);
                            let first = *self.fake.pick(fake::KOREAN_GIVEN_NAMES);
                            (
                                first,
                                last,
                                *self.fake.pick(fake::KOREAN_TITLES),
                                *self.fake.pick(fake::KOREAN_DEPARTMENTS),
                                format!("{}@company.co.kr", code.to_lowercase()),
                                format!("010-{}-{}", self.fake.digits4(), self.fake.digits4()),
                            )
                        }
                        Locale::English => {
                            let first = *self.fake.pick(fake::ENGLISH_FIRST_NAMES);
                            let last = *self.fake.pick(fake::ENGLISH_LAST_NAMES);
                            (
                                first,
                                last,
                                *self.fake.pick(fake::ENGLISH_TITLES),
                                *self.fake.pick(fake::ENGLISH_DEPARTMENTS),
                                format!(
                                    "{}.{}@company.com",
                                    first.to_lowercase(),
                                    last.to_lowercase()
                                ),
                                format!("+1-555-{}", self.fake.digits4()),
                            )
                        }
                    };

                let reports_to = if position == 1 {
                    None
                } else {
                    Some(self.fake.ordinal(position - 1))
                };

                Employee {
                    code,
                    first_name: first_name.to_string(),
                    last_name: last_name.to_string(),
                    title: title.to_string(),
                    birth_date: self.fake.date_between(birth_start, birth_end),
                    hire_date: self.fake.date_between(hire_start, hire_end),
                    email,
                    phone,
                    department: department.to_string(),
                    salary: Money::from_units(self.fake.int_range(3000, 9000)),
                    reports_to,
                    is_active: true,
                }
            })
            .collect()
    }

    /// Orders placed during 2024 by random customers, taken by random employees
    ///
    /// Fails when there are no customers or employees to reference.
    pub fn orders(
        &mut self,
        count: usize,
        customers: usize,
        employees: usize,
    ) -> anyhow::Result<Vec<Order>> {
        if customers == 0 || employees == 0 {
            anyhow::bail!(
                "orders need at least one customer and one employee (got {} and {})",
                customers,
                employees
            );
        }

        let window_start = fake::ymd(2024, 1, 1).and_time(NaiveTime::MIN);
        let window_end = fake::ymd(2024, 12, 31)
            .and_hms_opt(23, 59, 59)
            .unwrap_or(window_start);

        let orders: Vec<Order> = (0..count)
            .map(|i| {
                let order_date: NaiveDateTime =
                    self.fake.datetime_between(window_start, window_end);
                let required_date = self.fake.days_after(order_date, 1, 10);
                let shipped_date = if self.fake.bool_with_probability(UNSHIPPED_PROBABILITY) {
                    None
                } else {
                    Some(self.fake.days_after(order_date, 1, 7))
                };

                let status = match shipped_date {
                    None => OrderStatus::Pending,
                    Some(_) => {
                        *self
                            .fake
                            .pick(&[OrderStatus::Shipped, OrderStatus::Delivered])
                    }
                };
                let payment_status = match status {
                    OrderStatus::Pending => PaymentStatus::Pending,
                    OrderStatus::Shipped | OrderStatus::Delivered => PaymentStatus::Paid,
                };

                let subtotal = self.fake.price(50, 5000);
                let tax = subtotal.percent(TAX_PERCENT);

                let notes = if self.fake.bool_with_probability(NO_NOTES_PROBABILITY) {
                    None
                } else {
                    Some(self.fake.pick(fake::ORDER_NOTES).to_string())
                };

                Order {
                    order_number: format!("ORD-2024-{:05}", i + 1),
                    customer_id: self.fake.ordinal(customers),
                    order_date,
                    required_date,
                    shipped_date,
                    status,
                    subtotal,
                    tax,
                    total: subtotal + tax,
                    payment_method: self.fake.pick(fake::PAYMENT_METHODS).to_string(),
                    payment_status,
                    employee_id: self.fake.ordinal(employees),
                    notes,
                }
            })
            .collect();
        Ok(orders)
    }

    /// Order lines referencing random orders and products
    ///
    /// Fails when there are no orders or products to reference.
    pub fn order_details(
        &mut self,
        count: usize,
        orders: usize,
        products: usize,
    ) -> anyhow::Result<Vec<OrderDetail>> {
        if orders == 0 || products == 0 {
            anyhow::bail!(
                "order details need at least one order and one product (got {} and {})",
                orders,
                products
            );
        }

        Ok((0..count)
            .map(|_| OrderDetail {
                order_id: self.fake.ordinal(orders),
                product_id: self.fake.ordinal(products),
                unit_price: self.fake.price(5, 2000),
                quantity: self.fake.count_range(1, 5),
                discount: Money::from_units(*self.fake.pick(fake::DISCOUNTS)),
            })
            .collect())
    }
}

fn strip_spaces_lower(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

fn first_word_lower(s: &str) -> String {
    s.split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_counts() {
        assert_eq!(employee_count(1), 10);
        assert_eq!(employee_count(100), 50);
        assert_eq!(employee_count(1000), 100);
        assert_eq!(order_count(10), 10);
        assert_eq!(order_count(500), 100);
        assert_eq!(order_detail_count(7), 14);
    }

    #[test]
    fn test_korean_corporate_prefix() {
        let mut gen = Generator::new(1);
        let customers = gen.customers(24);
        assert_eq!(customers[0].name, "(주)한국전자");
        assert_eq!(customers[9].name, "(주)경기통상");
        assert_eq!(customers[10].name, "서울가구");
        assert_eq!(customers[12].name, "Tech Solutions Inc");
    }

    #[test]
    fn test_customer_emails_are_derived() {
        let mut gen = Generator::new(1);
        let customers = gen.customers(2);
        assert_eq!(customers[0].email, "김철수@한국전자.co.kr");
        assert_eq!(customers[1].email, "john@tech.com");
        assert_eq!(customers[1].code, "CUST002");
    }

    #[test]
    fn test_pools_cycle() {
        let mut gen = Generator::new(1);
        let customers = gen.customers(120);
        // 60 Korean: slot 50 wraps back to the first company
        assert_eq!(customers[50].name, "(주)한국전자");
        assert_eq!(customers[60].name, "Tech Solutions Inc");
        assert_eq!(customers[110].name, "Tech Solutions Inc");
        assert_eq!(customers[119].code, "CUST120");
    }

    #[test]
    fn test_generate_rejects_zero_rows() {
        let mut gen = Generator::new(1);
        let err = gen.generate(0).unwrap_err();
        assert!(err.to_string().contains("greater than 0"));
    }

    #[test]
    fn test_generate_rejects_rows_above_max() {
        let mut gen = Generator::new(1);
        let err = gen.generate(MAX_ROWS + 1).unwrap_err();
        assert!(err.to_string().contains("at most 100000"), "{}", err);
        // Would overflow `2 * rows` if it reached the count helpers
        assert!(gen.generate(usize::MAX / 2 + 1).is_err());
    }

    #[test]
    fn test_validate_rows_names_source() {
        assert!(validate_rows(1, "--rows").is_ok());
        assert!(validate_rows(MAX_ROWS, "--rows").is_ok());
        let err = validate_rows(0, "config `rows`").unwrap_err();
        assert_eq!(err.to_string(), "config `rows` must be greater than 0");
    }

    #[test]
    fn test_orders_without_parents_rejected() {
        let mut gen = Generator::new(1);
        assert!(gen.orders(3, 0, 5).is_err());
        assert!(gen.orders(3, 5, 0).is_err());
        assert!(gen.order_details(3, 0, 5).is_err());
        assert!(gen.order_details(3, 5, 0).is_err());
        assert_eq!(gen.orders(0, 1, 1).unwrap().len(), 0);
    }

    #[test]
    fn test_shipped_orders_are_not_pending() {
        let mut gen = Generator::new(5);
        for order in gen.orders(100, 10, 10).unwrap() {
            match order.shipped_date {
                None => assert_eq!(order.status, OrderStatus::Pending),
                Some(shipped) => {
                    assert_ne!(order.status, OrderStatus::Pending);
                    let days = (shipped - order.order_date).num_days();
                    assert!((1..=7).contains(&days));
                }
            }
        }
    }
}
