//! Routes command - prints the effective guard table

use crate::config::AppConfig;

/// Print the role-guarded prefixes the guard will enforce.
pub fn run() -> anyhow::Result<()> {
    let config = AppConfig::load().unwrap_or_default();
    let table = config.guard.table();

    println!("Role-guarded prefixes:");
    for guard in table.role_guards() {
        println!("  {:<30} {:?}", guard.prefix, guard.required_role);
    }

    Ok(())
}
