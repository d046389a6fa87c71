//! The interactive menu shell: main → products / employees / statistics.
//!
//! The shell owns the two collections for the process lifetime and passes
//! them by reference into the core. All input validation lives here; the
//! core only ever sees well-formed arguments.

use crate::{
    prompt::{PromptError, Prompter},
    render,
};
use scandb_core::{
    Criteria, Direction, Predicate, Value,
    aggregate::{average, group_count, sum_product, top_n_by},
    criteria::filter_by_criteria,
    model::{Employee, Product},
    obs,
    query::{
        filter_available, filter_by_field_ci, filter_by_range, filter_low_stock,
        filter_out_of_stock, find_by_field_ci, find_by_full_name, find_by_id,
    },
    record::{Collection, CollectionError},
};
use thiserror::Error as ThisError;

///
/// ShellError
///

#[derive(Debug, ThisError)]
pub enum ShellError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("catalog construction failed: {0}")]
    Collection(#[from] CollectionError),

    #[error("json rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}

///
/// Shell
///

pub struct Shell {
    prompter: Prompter,
    products: Collection<Product>,
    employees: Collection<Employee>,
    json: bool,
}

impl Shell {
    pub fn new(json: bool) -> Result<Self, ShellError> {
        Ok(Self {
            prompter: Prompter::new()?,
            products: Collection::new(Product::catalog())?,
            employees: Collection::new(Employee::roster())?,
            json,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            println!();
            println!("=== scandb ===");
            println!("1. Product search");
            println!("2. Employee search");
            println!("3. Statistics");
            println!("4. Exit");

            match self.prompter.read_choice("> ", 4)? {
                Some(1) => self.menu_products()?,
                Some(2) => self.menu_employees()?,
                Some(3) => self.show_statistics()?,
                _ => {
                    println!("Bye.");
                    return Ok(());
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    fn menu_products(&mut self) -> Result<(), ShellError> {
        loop {
            println!();
            println!("--- products ---");
            println!(" 1. Find by id");
            println!(" 2. Find by name");
            println!(" 3. Filter by category");
            println!(" 4. Filter by brand");
            println!(" 5. Available products");
            println!(" 6. Filter by price range");
            println!(" 7. Count by category");
            println!(" 8. Low stock");
            println!(" 9. Most / least expensive");
            println!("10. Advanced filter");
            println!("11. Back");

            match self.prompter.read_choice("> ", 11)? {
                Some(1) => self.product_by_id()?,
                Some(2) => self.product_by_name()?,
                Some(3) => self.products_by_field("category", "Category: ")?,
                Some(4) => self.products_by_field("brand", "Brand: ")?,
                Some(5) => self.products_available()?,
                Some(6) => self.products_by_price_range()?,
                Some(7) => self.products_category_count()?,
                Some(8) => self.products_low_stock()?,
                Some(9) => self.products_price_extremes()?,
                Some(10) => self.products_advanced_filter()?,
                _ => return Ok(()),
            }
        }
    }

    fn product_by_id(&mut self) -> Result<(), ShellError> {
        let Some(id) = self.prompter.read_u32("Product id: ")? else {
            return Ok(());
        };
        self.show_product(find_by_id(&self.products, id))
    }

    fn product_by_name(&mut self) -> Result<(), ShellError> {
        let Some(name) = self.prompter.read_text("Product name: ")? else {
            return Ok(());
        };
        self.show_product(find_by_field_ci(
            &self.products,
            "name",
            Value::from(name.as_str()),
        ))
    }

    fn products_by_field(&mut self, field: &str, prompt: &str) -> Result<(), ShellError> {
        let Some(wanted) = self.prompter.read_text(prompt)? else {
            return Ok(());
        };
        let hits = filter_by_field_ci(&self.products, field, Value::from(wanted.as_str()));
        self.show_products(&hits)
    }

    fn products_available(&mut self) -> Result<(), ShellError> {
        let hits = filter_available(&self.products);
        self.show_products(&hits)
    }

    fn products_by_price_range(&mut self) -> Result<(), ShellError> {
        let Some(min) = self.prompter.read_f64("Minimum price: ")? else {
            return Ok(());
        };
        let Some(max) = self.prompter.read_f64("Maximum price: ")? else {
            return Ok(());
        };
        if min > max {
            println!("Minimum exceeds maximum; nothing can match.");
        }
        let hits = filter_by_range(&self.products, "price", min, max);
        self.show_products(&hits)
    }

    fn products_category_count(&mut self) -> Result<(), ShellError> {
        let counts = group_count(&self.products, "category");
        let total = self.products.len();

        println!("Distribution of {total} products:");
        for (category, count) in counts {
            println!("  - {category}: {count}");
        }
        Ok(())
    }

    fn products_low_stock(&mut self) -> Result<(), ShellError> {
        let Some(threshold) = self.prompter.read_u32("Stock threshold: ")? else {
            return Ok(());
        };
        let hits = filter_low_stock(&self.products, threshold);
        self.show_products(&hits)
    }

    fn products_price_extremes(&mut self) -> Result<(), ShellError> {
        let Some(n) = self.prompter.read_u32("How many: ")? else {
            return Ok(());
        };
        let n = n as usize;

        println!("Most expensive:");
        for product in top_n_by(&self.products, "price", n, Direction::Desc) {
            println!("{}", render::product_line(product));
        }
        println!("Least expensive:");
        for product in top_n_by(&self.products, "price", n, Direction::Asc) {
            println!("{}", render::product_line(product));
        }
        Ok(())
    }

    fn products_advanced_filter(&mut self) -> Result<(), ShellError> {
        let Some(min) = self.prompter.read_f64("Minimum price: ")? else {
            return Ok(());
        };
        let Some(max) = self.prompter.read_f64("Maximum price: ")? else {
            return Ok(());
        };

        let criteria = Criteria::new()
            .price_min(min)
            .price_max(max)
            .available(true);

        match filter_by_criteria(&self.products, &criteria) {
            Ok(hits) => self.show_products(&hits),
            Err(err) => {
                println!("{err}");
                Ok(())
            }
        }
    }

    // ------------------------------------------------------------------
    // Employees
    // ------------------------------------------------------------------

    fn menu_employees(&mut self) -> Result<(), ShellError> {
        loop {
            println!();
            println!("--- employees ---");
            println!("1. Find by id");
            println!("2. Find by full name");
            println!("3. Filter by department");
            println!("4. Active employees");
            println!("5. List everyone");
            println!("6. Filter by salary range");
            println!("7. Search by name fragment");
            println!("8. Advanced filter");
            println!("9. Back");

            match self.prompter.read_choice("> ", 9)? {
                Some(1) => self.employee_by_id()?,
                Some(2) => self.employee_by_full_name()?,
                Some(3) => self.employees_by_department()?,
                Some(4) => self.employees_active()?,
                Some(5) => {
                    let everyone: Vec<&Employee> = self.employees.as_slice().iter().collect();
                    self.show_employees(&everyone)?;
                }
                Some(6) => self.employees_by_salary_range()?,
                Some(7) => self.employees_by_name_fragment()?,
                Some(8) => self.employees_advanced_filter()?,
                _ => return Ok(()),
            }
        }
    }

    fn employee_by_id(&mut self) -> Result<(), ShellError> {
        let Some(id) = self.prompter.read_u32("Employee id: ")? else {
            return Ok(());
        };
        self.show_employee(find_by_id(&self.employees, id))
    }

    fn employee_by_full_name(&mut self) -> Result<(), ShellError> {
        let Some(name) = self.prompter.read_text("Full name (e.g. Ana García): ")? else {
            return Ok(());
        };
        self.show_employee(find_by_full_name(&self.employees, &name))
    }

    fn employees_by_department(&mut self) -> Result<(), ShellError> {
        let Some(department) = self.prompter.read_text("Department: ")? else {
            return Ok(());
        };
        let hits = filter_by_field_ci(
            &self.employees,
            "department",
            Value::from(department.as_str()),
        );
        self.show_employees(&hits)
    }

    fn employees_active(&mut self) -> Result<(), ShellError> {
        let hits = self
            .employees
            .query()
            .filter(Predicate::eq("active", Value::Bool(true)))
            .all();
        self.show_employees(&hits)
    }

    fn employees_by_salary_range(&mut self) -> Result<(), ShellError> {
        let Some(min) = self.prompter.read_f64("Minimum salary: ")? else {
            return Ok(());
        };
        let Some(max) = self.prompter.read_f64("Maximum salary: ")? else {
            return Ok(());
        };
        let hits = filter_by_range(&self.employees, "salary", min, max);
        self.show_employees(&hits)
    }

    fn employees_by_name_fragment(&mut self) -> Result<(), ShellError> {
        let Some(fragment) = self.prompter.read_text("Name fragment: ")? else {
            return Ok(());
        };

        // Match against either name field, preserving roster order.
        let hits = self
            .employees
            .query()
            .filter(
                Predicate::contains_ci("first_name", Value::from(fragment.as_str()))
                    | Predicate::contains_ci("last_name", Value::from(fragment.as_str())),
            )
            .all();
        self.show_employees(&hits)
    }

    fn employees_advanced_filter(&mut self) -> Result<(), ShellError> {
        let Some(department) = self.prompter.read_text("Department: ")? else {
            return Ok(());
        };
        let Some(min) = self.prompter.read_f64("Minimum salary: ")? else {
            return Ok(());
        };

        let criteria = Criteria::new()
            .salary_min(min)
            .field("department", department.as_str())
            .field("active", true);

        match filter_by_criteria(&self.employees, &criteria) {
            Ok(hits) => self.show_employees(&hits),
            Err(err) => {
                println!("{err}");
                Ok(())
            }
        }
    }

    // ------------------------------------------------------------------
    // Statistics
    // ------------------------------------------------------------------

    fn show_statistics(&mut self) -> Result<(), ShellError> {
        let products = &self.products;
        let employees = &self.employees;

        println!();
        println!("--- product statistics ---");
        println!("  total:          {}", products.len());
        println!("  available:      {}", filter_available(products).len());
        println!("  out of stock:   {}", filter_out_of_stock(products).len());
        println!(
            "  inventory value: {}",
            render::currency(sum_product(products, "price", "stock"))
        );
        println!("  by category:");
        for (category, count) in group_count(products, "category") {
            println!("    - {category}: {count}");
        }

        let active = employees
            .query()
            .filter(Predicate::eq("active", Value::Bool(true)))
            .count();

        println!();
        println!("--- employee statistics ---");
        println!("  total:          {}", employees.len());
        println!("  active:         {active}");
        println!("  inactive:       {}", employees.len() - active);
        println!(
            "  average salary: {}",
            render::currency(average(employees, "salary"))
        );
        println!("  by department:");
        for (department, count) in group_count(employees, "department") {
            println!("    - {department}: {count}");
        }

        let report = obs::metrics_report();
        println!();
        println!("--- engine ---");
        println!("  scans:        {}", report.scans);
        println!("  rows scanned: {}", report.rows_scanned);

        Ok(())
    }

    // ------------------------------------------------------------------
    // Rendering helpers
    // ------------------------------------------------------------------

    fn show_product(&self, product: Option<&Product>) -> Result<(), ShellError> {
        match product {
            Some(product) if self.json => println!("{}", render::json(product)?),
            Some(product) => println!("{}", render::product_block(product)),
            None => println!("No product found."),
        }
        Ok(())
    }

    fn show_products(&self, products: &[&Product]) -> Result<(), ShellError> {
        if products.is_empty() {
            println!("No products matched.");
            return Ok(());
        }

        if self.json {
            println!("{}", render::json(&products)?);
            return Ok(());
        }

        println!("{} product(s):", products.len());
        for product in products {
            println!("{}", render::product_line(product));
        }
        Ok(())
    }

    fn show_employee(&self, employee: Option<&Employee>) -> Result<(), ShellError> {
        match employee {
            Some(employee) if self.json => println!("{}", render::json(employee)?),
            Some(employee) => println!("{}", render::employee_block(employee)),
            None => println!("No employee found."),
        }
        Ok(())
    }

    fn show_employees(&self, employees: &[&Employee]) -> Result<(), ShellError> {
        if employees.is_empty() {
            println!("No employees matched.");
            return Ok(());
        }

        if self.json {
            println!("{}", render::json(&employees)?);
            return Ok(());
        }

        println!("{} employee(s):", employees.len());
        for employee in employees {
            println!("{}", render::employee_line(employee));
        }
        Ok(())
    }
}
