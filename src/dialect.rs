//! SQL dialects and the literal styles that distinguish them.
//!
//! Dialects only differ in how booleans, dates and timestamps are spelled.
//! Everything else (quoting, NULL, numbers) is shared, so each dialect maps to
//! a [`LiteralStyle`] entry in a small static table.

/// Target SQL dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// Microsoft SQL Server (default)
    #[default]
    MsSql,
    /// MySQL / MariaDB
    MySql,
    /// PostgreSQL
    Postgres,
    /// Oracle
    Oracle,
    /// SQLite
    Sqlite,
}

impl Dialect {
    pub const ALL: [Dialect; 5] = [
        Dialect::MsSql,
        Dialect::MySql,
        Dialect::Postgres,
        Dialect::Oracle,
        Dialect::Sqlite,
    ];

    /// Canonical lowercase name, also used in the default output file name
    pub fn name(self) -> &'static str {
        match self {
            Dialect::MsSql => "mssql",
            Dialect::MySql => "mysql",
            Dialect::Postgres => "postgresql",
            Dialect::Oracle => "oracle",
            Dialect::Sqlite => "sqlite",
        }
    }

    /// Literal formatting rules for this dialect
    pub fn style(self) -> &'static LiteralStyle {
        match self {
            Dialect::Postgres => &POSTGRES_STYLE,
            Dialect::Oracle => &ORACLE_STYLE,
            Dialect::MsSql | Dialect::MySql | Dialect::Sqlite => &DEFAULT_STYLE,
        }
    }
}

impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mssql" | "sqlserver" | "tsql" => Ok(Dialect::MsSql),
            "mysql" | "maria" | "mariadb" => Ok(Dialect::MySql),
            "postgresql" | "postgres" | "pg" => Ok(Dialect::Postgres),
            "oracle" => Ok(Dialect::Oracle),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            _ => Err(format!(
                "Unknown dialect: {}. Valid options: mssql, mysql, postgresql, oracle, sqlite",
                s
            )),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-dialect spelling of the literals that are not portable.
///
/// Date and timestamp functions receive the already formatted
/// `YYYY-MM-DD` / `YYYY-MM-DD HH:MM:SS` text.
pub struct LiteralStyle {
    pub boolean: fn(bool) -> &'static str,
    pub date: fn(&str) -> String,
    pub timestamp: fn(&str) -> String,
}

static DEFAULT_STYLE: LiteralStyle = LiteralStyle {
    boolean: numeric_bool,
    date: quoted,
    timestamp: quoted,
};

static POSTGRES_STYLE: LiteralStyle = LiteralStyle {
    boolean: keyword_bool,
    date: quoted,
    timestamp: quoted,
};

static ORACLE_STYLE: LiteralStyle = LiteralStyle {
    boolean: numeric_bool,
    date: oracle_date,
    timestamp: oracle_timestamp,
};

fn numeric_bool(b: bool) -> &'static str {
    if b {
        "1"
    } else {
        "0"
    }
}

fn keyword_bool(b: bool) -> &'static str {
    if b {
        "TRUE"
    } else {
        "FALSE"
    }
}

fn quoted(text: &str) -> String {
    format!("'{}'", text)
}

fn oracle_date(text: &str) -> String {
    format!("TO_DATE('{}', 'YYYY-MM-DD')", text)
}

fn oracle_timestamp(text: &str) -> String {
    format!("TO_TIMESTAMP('{}', 'YYYY-MM-DD HH24:MI:SS')", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("postgres".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("PG".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("maria".parse::<Dialect>().unwrap(), Dialect::MySql);
        assert_eq!("mariadb".parse::<Dialect>().unwrap(), Dialect::MySql);
        assert_eq!(" Oracle ".parse::<Dialect>().unwrap(), Dialect::Oracle);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "db2".parse::<Dialect>().unwrap_err();
        assert!(err.contains("db2"));
        assert!(err.contains("postgresql"));
    }

    #[test]
    fn test_name_roundtrips_through_parse() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.name().parse::<Dialect>().unwrap(), dialect);
        }
    }

    #[test]
    fn test_boolean_style() {
        for dialect in Dialect::ALL {
            let expected = if dialect == Dialect::Postgres {
                ("TRUE", "FALSE")
            } else {
                ("1", "0")
            };
            let style = dialect.style();
            assert_eq!(((style.boolean)(true), (style.boolean)(false)), expected);
        }
    }

    #[test]
    fn test_oracle_wraps_dates() {
        let style = Dialect::Oracle.style();
        assert_eq!(
            (style.date)("2024-03-01"),
            "TO_DATE('2024-03-01', 'YYYY-MM-DD')"
        );
        assert_eq!(
            (style.timestamp)("2024-03-01 08:15:00"),
            "TO_TIMESTAMP('2024-03-01 08:15:00', 'YYYY-MM-DD HH24:MI:SS')"
        );
        assert_eq!((Dialect::Sqlite.style().date)("2024-03-01"), "'2024-03-01'");
    }
}
