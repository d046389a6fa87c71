use crate::{record::Record, value::Value};
use serde::{Deserialize, Serialize};

///
/// Employee
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Employee {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub salary: f64,
    pub active: bool,
}

impl Employee {
    fn new(
        id: u32,
        first_name: &str,
        last_name: &str,
        department: &str,
        salary: f64,
        active: bool,
    ) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            department: department.to_string(),
            salary,
            active,
        }
    }

    /// Full display name, `first_name` then `last_name`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The fixed six-employee sample roster.
    #[must_use]
    pub fn roster() -> Vec<Self> {
        vec![
            Self::new(101, "Ana", "García", "Ventas", 35000.0, true),
            Self::new(102, "Carlos", "López", "Técnico", 42000.0, true),
            Self::new(103, "María", "Rodríguez", "Ventas", 38000.0, false),
            Self::new(104, "José", "Martínez", "Inventario", 30000.0, true),
            Self::new(105, "Laura", "Hernández", "Técnico", 45000.0, true),
            Self::new(106, "Pedro", "Gómez", "Administración", 32000.0, false),
        ]
    }
}

impl Record for Employee {
    fn fields() -> &'static [&'static str] {
        &["id", "first_name", "last_name", "department", "salary", "active"]
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(Value::from(self.id)),
            "first_name" => Some(Value::from(self.first_name.as_str())),
            "last_name" => Some(Value::from(self.last_name.as_str())),
            "department" => Some(Value::from(self.department.as_str())),
            "salary" => Some(Value::from(self.salary)),
            "active" => Some(Value::from(self.active)),
            _ => None,
        }
    }
}
