//! 預設衣櫃估算示例

use interior_estimator::prelude::*;

fn main() -> anyhow::Result<()> {
    println!("=== 預設衣櫃估算示例 ===\n");

    let project = Project::default();
    let result = project.estimate()?;

    println!("家具清單:");
    for item in &result.items {
        println!(
            "  - {} ({}' × {}' × {}')，比例 {}",
            item.name,
            item.dimensions.length(),
            item.dimensions.width(),
            item.dimensions.height(),
            item.scale_factor.round_dp(2)
        );
    }

    println!("\n材料:");
    for line in result.priced_lines() {
        println!(
            "  - {:<16} {:>4} × {:>6} = {:>10}",
            line.material.label(),
            line.effective_quantity,
            line.rate,
            line.cost
        );
    }

    println!("\n總價: {}", result.total_cost().round_dp(2));

    Ok(())
}
