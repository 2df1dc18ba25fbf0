//! Reporting queries
//!
//! Set operations, grouped aggregates and keyset pagination, all rendered as
//! plain SQL text ready to hand to a driver.

use queryhaus::prelude::*;
use serde_json::json;

fn monthly_totals(table: &str) -> QueryBuilder {
    QueryBuilder::new()
        .select(["date_trunc('month', created_at) AS month", "SUM(total) AS total"])
        .from(table)
        .group_by("date_trunc('month', created_at)")
}

fn main() -> anyhow::Result<()> {
    println!("📊 QueryHaus Reporting Queries\n");

    println!("=== Combined Sources ===");
    let archived = monthly_totals("archived_orders").build();
    let sql = monthly_totals("orders")
        .union_all(&archived)
        .order_by("month", SortOrder::Desc)
        .build();
    println!("{}", sql);

    println!("\n=== Customers Without Refunds ===");
    let refunded = QueryBuilder::new()
        .select(["customer_id"])
        .from("refunds")
        .build();
    let sql = QueryBuilder::new()
        .select(["customer_id"])
        .from("orders")
        .except(&refunded)
        .build();
    println!("{}", sql);

    println!("\n=== Keyset Pagination ===");
    // walking backwards flips both the sort direction and the cursor comparison
    let cursor = 1042;
    for (direction, operator) in [("ASC", ">"), ("DESC", "<")] {
        let sql = QueryBuilder::new()
            .select(["id", "title"])
            .from("articles")
            .and_where(format_args!("id {} {}", operator, cursor))
            .order_by("id", direction)
            .limit(25)
            .build();
        println!("{}", sql);

        let reversed = QueryBuilder::new()
            .select(["id", "title"])
            .from("articles")
            .and_where(format_args!("id {} {}", invert_operator(operator), cursor))
            .order_by("id", flip_sorting_mode(direction))
            .limit(25)
            .build();
        println!("{}", reversed);
    }

    println!("\n=== Literal Filters ===");
    let tags = json!(["rust", "sql"]);
    let sql = QueryBuilder::new()
        .select(["id"])
        .from("articles")
        .and_where(format_args!("tags && {}", literal(&tags)))
        .and_where(format_args!("published = {}", literal(&json!(true))))
        .build();
    println!("{}", sql);

    println!("\n=== Checked Against Policy ===");
    let haus = QueryHaus::new(BuilderConfig::new(true, 50, 500))?;
    let report = haus
        .query()
        .select(["region", "COUNT(*) AS orders"])
        .from("orders")
        .group_by("region");
    println!("{}", haus.render(&report)?);

    match haus.render(&report.copy().limit(10_000)) {
        Ok(sql) => println!("❌ Unexpectedly rendered: {}", sql),
        Err(err) => println!("✅ Rejected: {}", err),
    }

    Ok(())
}
