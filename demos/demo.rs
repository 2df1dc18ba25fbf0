//! QueryHaus demo
//!
//! Builds a handful of queries with the fluent builder, nests conditions,
//! reuses a template and renders through a configured QueryHaus.

use queryhaus::prelude::*;

fn main() -> anyhow::Result<()> {
    println!("🚀 QueryHaus Demo\n");

    // Configuration (falls back to defaults when no config file is present)
    let haus = match QueryHaus::load() {
        Ok(haus) => {
            println!("✅ Configuration loaded");
            haus
        }
        Err(err) => {
            println!("⚠️  {}, continuing with defaults", err);
            QueryHaus::new(BuilderConfig::default())?
        }
    };

    println!("\n=== Basic Query ===");
    let sql = QueryBuilder::new()
        .select(["u.id", "u.name"])
        .from("users u")
        .inner_join("accounts a", "a.user_id = u.id")
        .and_where("a.active")
        .order_by("u.name", SortOrder::Asc)
        .limit(20)
        .offset(40)
        .build();
    println!("{}", sql);

    println!("\n=== Nested Conditions ===");
    let name = "O'Brien";
    let sql = QueryBuilder::new()
        .select(["*"])
        .from("users")
        .and_where(format_args!("last_name = {}", quote(name)))
        .and_where(condition(|c| {
            c.or("age > 65")
                .or(condition(|c| c.and("age < 18").and("guardian_id IS NOT NULL")))
        }))
        .build();
    println!("{}", sql);

    println!("\n=== Subquery Join and CTE ===");
    let sql = QueryBuilder::new()
        .with("recent", |q| {
            q.select(["user_id", "MAX(created_at) AS last_seen"])
                .from("logins")
                .group_by("user_id")
        })
        .select(["u.name", "r.last_seen"])
        .from("users u")
        .left_join(
            sub("r", |q| q.select(["*"]).from("recent")),
            "r.user_id = u.id",
        )
        .build();
    println!("{}", sql);

    println!("\n=== Templates ===");
    let mut haus = haus;
    haus.register_template(
        "active_users",
        haus.query().select(["id", "email"]).from("users").and_where("active"),
    )?;

    let page = haus
        .template("active_users")?
        .order_by("id", flip_sorting_mode("ASC"))
        .limit(10);
    println!("{}", haus.render(&page)?);
    println!("Templates: {:?}", haus.list_templates());

    println!("\n=== Checked Rendering ===");
    match QueryBuilder::new().select(["*"]).left_join("b", "TRUE").try_build() {
        Ok(sql) => println!("❌ Unexpectedly rendered: {}", sql),
        Err(err) => println!("✅ Rejected: {}", err),
    }

    println!("\n🎉 Demo completed!");
    Ok(())
}
