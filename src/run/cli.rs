use anyhow::Result;

use crate::models::{BudgetTable, Category, Draft};
use crate::report;
use crate::store::TransactionStore;
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String], store: &mut TransactionStore) -> Result<()> {
    match args[1].as_str() {
        "list" | "ls" => cli_list(store),
        "add" => cli_add(&args[2..], store),
        "delete" | "rm" => cli_delete(&args[2..], store),
        "summary" | "s" => cli_summary(store),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("fintui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    let categories: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
    println!("FinTUI, a local-only personal finance tracker");
    println!();
    println!("Usage: fintui [command]");
    println!();
    println!("Commands:");
    println!("  (none)                             Launch interactive TUI");
    println!("  list                               List all transactions");
    println!("  add <date> <description> <amount> <category>");
    println!("                                     Add a transaction (date: YYYY-MM-DD)");
    println!("  delete <id>                        Delete a transaction");
    println!("  summary                            Print totals and budget status");
    println!("  --help, -h                         Show this help");
    println!("  --version, -V                      Show version");
    println!();
    println!("Categories: {}", categories.join(", "));
}

fn cli_list(store: &TransactionStore) -> Result<()> {
    let transactions = store.transactions();
    if transactions.is_empty() {
        println!("No transactions");
        return Ok(());
    }

    println!("{:>5}  {:<10}  {:<36}  {:<9}  {:>12}", "ID", "Date", "Description", "Category", "Amount");
    for txn in transactions {
        println!(
            "{:>5}  {:<10}  {:<36}  {:<9}  {:>12}",
            txn.id,
            txn.date,
            crate::ui::util::truncate(&txn.description, 36),
            txn.category.as_str(),
            format_amount(txn.amount),
        );
    }
    Ok(())
}

fn cli_add(args: &[String], store: &mut TransactionStore) -> Result<()> {
    // Date first, category last, amount second to last; the description is
    // whatever sits in between (it may contain spaces).
    if args.len() < 4 {
        anyhow::bail!("Usage: fintui add <date> <description> <amount> <category>");
    }

    let draft = Draft {
        date: args[0].clone(),
        description: args[1..args.len() - 2].join(" "),
        amount: args[args.len() - 2].clone(),
        category: args[args.len() - 1].clone(),
    };

    let id = store.create(&draft)?;
    println!("Added transaction #{id}: {} {} ({})", draft.description, draft.amount, draft.category);
    Ok(())
}

fn cli_delete(args: &[String], store: &mut TransactionStore) -> Result<()> {
    let Some(raw) = args.first() else {
        anyhow::bail!("Usage: fintui delete <id>");
    };
    let id: i64 = raw
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid id: {raw}"))?;

    if store.delete(id)? {
        println!("Deleted transaction #{id}");
    } else {
        println!("No transaction with id {id}");
    }
    Ok(())
}

fn cli_summary(store: &TransactionStore) -> Result<()> {
    let transactions = store.transactions();
    let budgets = BudgetTable::default();

    println!("Total expenses: {}", format_amount(report::total_expenses(transactions)));
    println!();
    println!("{:<11}  {:>12}  {:>12}  {:>6}", "Category", "Spent", "Budget", "Used");
    for row in report::budget_vs_actual(transactions, &budgets) {
        let used = if row.limit > rust_decimal::Decimal::ZERO {
            row.actual / row.limit * rust_decimal::Decimal::from(100)
        } else {
            rust_decimal::Decimal::ZERO
        };
        println!(
            "{:<11}  {:>12}  {:>12}  {:>5.0}%",
            row.category.as_str(),
            format_amount(row.actual),
            format_amount(row.limit),
            used,
        );
    }
    Ok(())
}
