// Checked rendering returns errors instead of emitting broken SQL
use clause_builder::*;

fn main() {
    println!("Testing error handling scenarios...");

    // Test 1: Invalid identifiers should return errors, not panic
    let invalid_names = [
        "SELECT",        // Reserved keyword
        "123table",      // Starts with number
        "user-name",     // Invalid character
        "",              // Empty
        &"a".repeat(64), // Too long
    ];

    for name in invalid_names {
        match ValidatedIdentifier::new(name) {
            Ok(_) => println!("❌ Unexpectedly accepted invalid name: {}", name),
            Err(e) => println!("✅ Correctly rejected '{}': {}", name, e),
        }
    }

    // Test 2: Valid names should work
    let valid_names = ["users", "user_profiles", "_private", "table123"];

    for name in valid_names {
        match ValidatedIdentifier::new(name) {
            Ok(validated) => println!("✅ Accepted valid name: {}", validated),
            Err(e) => println!("❌ Unexpectedly rejected valid name '{}': {}", name, e),
        }
    }

    // Test 3: Structural mistakes surface through try_build
    let broken = [
        ("empty builder", QueryBuilder::new()),
        (
            "join without FROM",
            QueryBuilder::new().select(["*"]).inner_join("b", "b.id = a.b_id"),
        ),
        (
            "reserved CTE alias",
            QueryBuilder::new()
                .with_str("order", "SELECT 1")
                .select(["*"])
                .from("order"),
        ),
    ];

    for (label, builder) in broken {
        match builder.try_build() {
            Ok(sql) => println!("❌ Unexpectedly rendered {}: {}", label, sql),
            Err(e) => println!("✅ Correctly rejected {}: {}", label, e),
        }
    }

    // Test 4: Limit policy from configuration
    let config = BuilderConfig::new(false, 25, 100);
    match QueryBuilder::from_config(&config)
        .select(["id"])
        .from("users")
        .limit(1000)
        .try_build_with(&config)
    {
        Ok(sql) => println!("❌ Unexpectedly accepted oversized limit: {}", sql),
        Err(e) => println!("✅ Correctly rejected oversized limit: {}", e),
    }

    println!("Error handling test completed successfully! ✅");
}
