//! The five generated tables, their column lists and selection parsing.

use std::collections::BTreeSet;

/// A generated table. Declaration order is the fixed output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Table {
    Customers,
    Products,
    Employees,
    Orders,
    OrderDetails,
}

const CUSTOMER_COLUMNS: &[&str] = &[
    "CustomerCode",
    "CustomerName",
    "ContactName",
    "Email",
    "Phone",
    "Address",
    "City",
    "Region",
    "Country",
    "CustomerType",
    "CreditLimit",
    "IsActive",
];

const PRODUCT_COLUMNS: &[&str] = &[
    "ProductCode",
    "ProductName",
    "Category",
    "UnitPrice",
    "UnitsInStock",
    "UnitsOnOrder",
    "ReorderLevel",
    "Discontinued",
    "Description",
];

const EMPLOYEE_COLUMNS: &[&str] = &[
    "EmployeeCode",
    "FirstName",
    "LastName",
    "Title",
    "BirthDate",
    "HireDate",
    "Email",
    "Phone",
    "Department",
    "Salary",
    "ReportsTo",
    "IsActive",
];

const ORDER_COLUMNS: &[&str] = &[
    "OrderNumber",
    "CustomerID",
    "OrderDate",
    "RequiredDate",
    "ShippedDate",
    "OrderStatus",
    "SubTotal",
    "TaxAmount",
    "TotalAmount",
    "PaymentMethod",
    "PaymentStatus",
    "EmployeeID",
    "Notes",
];

const ORDER_DETAIL_COLUMNS: &[&str] =
    &["OrderID", "ProductID", "UnitPrice", "Quantity", "Discount"];

impl Table {
    pub const ALL: [Table; 5] = [
        Table::Customers,
        Table::Products,
        Table::Employees,
        Table::Orders,
        Table::OrderDetails,
    ];

    /// Table name as written in the INSERT statements
    pub fn sql_name(self) -> &'static str {
        match self {
            Table::Customers => "Customers",
            Table::Products => "Products",
            Table::Employees => "Employees",
            Table::Orders => "Orders",
            Table::OrderDetails => "OrderDetails",
        }
    }

    /// Lowercase name accepted by `--tables`
    pub fn key(self) -> &'static str {
        match self {
            Table::Customers => "customers",
            Table::Products => "products",
            Table::Employees => "employees",
            Table::Orders => "orders",
            Table::OrderDetails => "orderdetails",
        }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Table::Customers => CUSTOMER_COLUMNS,
            Table::Products => PRODUCT_COLUMNS,
            Table::Employees => EMPLOYEE_COLUMNS,
            Table::Orders => ORDER_COLUMNS,
            Table::OrderDetails => ORDER_DETAIL_COLUMNS,
        }
    }
}

impl std::str::FromStr for Table {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "customers" => Ok(Table::Customers),
            "products" => Ok(Table::Products),
            "employees" => Ok(Table::Employees),
            "orders" => Ok(Table::Orders),
            "orderdetails" | "order_details" => Ok(Table::OrderDetails),
            _ => Err(format!(
                "Unknown table: {}. Valid options: customers, products, employees, orders, \
                 orderdetails",
                s.trim()
            )),
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Parse a table selection into the fixed output order.
///
/// Unknown names are rejected, duplicates collapse, and blank entries
/// (`"customers,,orders"`) are skipped. A selection naming no table at all is
/// an error.
pub fn parse_table_list<I, S>(names: I) -> Result<Vec<Table>, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut selected = BTreeSet::new();
    for name in names {
        let name = name.as_ref().trim();
        if name.is_empty() {
            continue;
        }
        selected.insert(name.parse::<Table>()?);
    }

    if selected.is_empty() {
        return Err("No tables selected".to_string());
    }

    Ok(selected.into_iter().collect())
}

/// Parse a comma-separated `--tables` value
pub fn parse_table_selection(list: &str) -> Result<Vec<Table>, String> {
    parse_table_list(list.split(','))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_uses_fixed_order() {
        let tables = parse_table_selection("orders, customers,orderdetails").unwrap();
        assert_eq!(
            tables,
            vec![Table::Customers, Table::Orders, Table::OrderDetails]
        );
    }

    #[test]
    fn test_selection_dedupes_and_ignores_case() {
        let tables = parse_table_selection("Products,products,PRODUCTS").unwrap();
        assert_eq!(tables, vec![Table::Products]);
    }

    #[test]
    fn test_selection_rejects_unknown() {
        let err = parse_table_selection("customers,invoices").unwrap_err();
        assert!(err.contains("invoices"));
    }

    #[test]
    fn test_selection_rejects_empty() {
        assert!(parse_table_selection(" , ").is_err());
    }

    #[test]
    fn test_order_details_alias() {
        assert_eq!("order_details".parse::<Table>().unwrap(), Table::OrderDetails);
    }
}
