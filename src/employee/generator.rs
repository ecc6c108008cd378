//! Random employee population generation
//!
//! This module contains the demo population generator used when no roster
//! file is supplied.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use tracing::debug;

use crate::employee::{Employee, Roster};
use crate::pass::Pass;
use crate::types::config::MAX_TEMPORARY_PASS_DAYS;
use crate::types::RegistryConfig;

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Alex", "Maria", "Ivan", "Olga", "Sam", "Priya", "Chen", "Fatima",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Doe", "Petrov", "Garcia", "Kumar", "Wong", "Novak", "Hassan", "Brown", "Lee",
];

const POSITIONS: &[&str] =
    &["Manager", "Engineer", "Analyst", "Technician", "Contractor", "Intern", "Director"];

/// Generator for demo employees with permanent and temporary passes
pub struct EmployeeGenerator {
    rng: Box<dyn rand::RngCore>,
}

impl fmt::Debug for EmployeeGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmployeeGenerator").finish()
    }
}

impl Default for EmployeeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self { rng: Box::new(rand::thread_rng()) }
    }

    /// Create a new generator with a specific seed for reproducible results
    pub fn with_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self { rng: Box::new(rand::rngs::StdRng::seed_from_u64(seed)) }
    }

    /// Create a generator honouring the configured seed, if any
    pub fn from_config(config: &RegistryConfig) -> Self {
        config.seed.map(Self::with_seed).unwrap_or_default()
    }

    /// Generate `config.generate_count` employees with ids `1..=count`
    ///
    /// The first `permanent_pass_percentage` share receive a permanent pass and
    /// the last `temporary_pass_percentage` share a temporary pass whose window
    /// contains `reference`. The two shares may overlap. Window lengths are
    /// capped at [`MAX_TEMPORARY_PASS_DAYS`].
    pub fn generate(&mut self, config: &RegistryConfig, reference: DateTime<Utc>) -> Roster {
        let count = config.generate_count;
        let permanent_count = (count as f64 * config.permanent_pass_percentage) as usize;
        let temporary_count = (count as f64 * config.temporary_pass_percentage) as usize;
        let temporary_from = count.saturating_sub(temporary_count);
        let max_days = i64::from(config.temporary_pass_max_days.clamp(1, MAX_TEMPORARY_PASS_DAYS));

        let mut employees = Vec::with_capacity(count);
        for index in 0..count {
            let mut employee = self.generate_employee(index as i64 + 1);

            if index < permanent_count {
                employee.add_pass(Pass::Permanent);
            }
            if index >= temporary_from {
                employee.add_pass(self.generate_temporary_pass(reference, max_days));
            }
            employees.push(employee);
        }

        debug!(
            count,
            permanent_count, temporary_count, "Generated employee population"
        );
        Roster::new(employees)
    }

    fn generate_employee(&mut self, id: i64) -> Employee {
        let first = self.pick(FIRST_NAMES);
        let last = self.pick(LAST_NAMES);
        let position = self.pick(POSITIONS);
        let login = format!("{}{}{}", first[..1].to_lowercase(), last.to_lowercase(), id);
        let password: String = (0..8)
            .map(|_| char::from(b'a' + self.rng.gen_range(0..26u8)))
            .collect();

        Employee::new(id, last, first, position, login, password)
    }

    fn generate_temporary_pass(&mut self, reference: DateTime<Utc>, max_days: i64) -> Pass {
        let started_days_ago = self.rng.gen_range(0..=max_days);
        let length_days = self.rng.gen_range(started_days_ago.max(1)..=max_days);
        let start = reference
            .checked_sub_signed(Duration::days(started_days_ago))
            .unwrap_or(reference);
        let end = start
            .checked_add_signed(Duration::days(length_days))
            .unwrap_or(reference);
        Pass::temporary(start, end)
    }

    fn pick(&mut self, options: &[&'static str]) -> &'static str {
        options.choose(&mut self.rng).copied().unwrap_or("Unknown")
    }
}
