//! # 兩房公寓估算完整範例
//!
//! 這個範例展示完整的估算流程：
//! - 家具：主臥衣櫃、雙人床、床頭櫃、廚具、電視櫃
//! - 單價：由 JSON 配置覆蓋預設值
//! - 數量：手動調整 18mm 夾板
//! - 成本：工資 25%、GST 18%

use interior_estimator::prelude::*;
use tracing_subscriber::EnvFilter;

const CONFIG_JSON: &str = r#"{
    "rates": {
        "ply18mm": { "rate": 128, "brand": "Greenply" },
        "pvcMica": { "rate": 145 }
    },
    "settings": { "laborPercentage": 25, "gstPercentage": 18 }
}"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("🏠 ===== 兩房公寓估算範例 =====");
    println!();

    // ========== 1. 載入配置 ==========
    println!("⚙️  步驟 1: 載入單價與百分比配置");
    let config = EstimatorConfig::from_json(CONFIG_JSON)?;
    println!(
        "   ✓ 工資 {}%，GST {}%",
        config.settings.labor_percentage(),
        config.settings.gst_percentage()
    );
    println!();

    // ========== 2. 建立家具清單 ==========
    println!("🛏️  步驟 2: 建立家具清單");
    let mut project = Project::new(config);
    project.update_furniture(1, FurnitureUpdate::Name("Master Wardrobe".to_string()));
    project.add_custom_furniture(
        "Queen Bed",
        FurnitureType::Bed,
        Dimensions::new(Decimal::new(65, 1), Decimal::from(5), Decimal::new(15, 1)),
    );
    project.add_custom_furniture(
        "Side Table",
        FurnitureType::SideTable,
        Dimensions::from_feet(2, 2, 2),
    );
    project.add_custom_furniture("Kitchen", FurnitureType::Kitchen, Dimensions::from_feet(10, 7, 2));
    let tv_id = project.add_furniture();
    project.update_furniture_field(tv_id, "name", "TV Unit")?;
    project.update_furniture_field(tv_id, "type", "tvUnit")?;
    project.update_furniture_field(tv_id, "length", "7")?;
    project.update_furniture_field(tv_id, "width", "6")?;
    project.update_furniture_field(tv_id, "height", "0.75")?;

    for item in project.items() {
        println!(
            "   ✓ #{} {} [{}] {}' × {}' × {}'",
            item.id,
            item.name,
            item.furniture_type.label(),
            item.dimensions.length(),
            item.dimensions.width(),
            item.dimensions.height()
        );
    }
    println!();

    // ========== 3. 手動調整數量 ==========
    println!("✏️  步驟 3: 手動調整 18mm 夾板數量");
    project.set_quantity_input(MaterialKey::Ply18mm, "20");
    println!("   ✓ ply18mm = 20");
    println!();

    // ========== 4. 執行估算 ==========
    println!("🚀 步驟 4: 執行估算");
    let result = project.estimate()?;
    println!("   ✓ 完成！耗時 {} ms", result.calculation_time_ms.unwrap_or(0));
    println!();

    // ========== 5. 顯示結果 ==========
    println!("📋 步驟 5: 各家具材料");
    println!("----------------------------------------");
    for item in &result.items {
        println!("{} (比例 {})", item.name, item.scale_factor.round_dp(3));
        for (material, qty) in &item.materials {
            if project.show_standard_requirements() {
                println!(
                    "  ├─ {:<16} {:>3}（標準 {}）",
                    material.label(),
                    qty,
                    item.standard.materials[material]
                );
            } else {
                println!("  ├─ {:<16} {:>3}", material.label(), qty);
            }
        }
        println!();
    }

    println!("📦 材料總表");
    println!("----------------------------------------");
    for line in &result.materials {
        let marker = if line.is_overridden() {
            format!("（計算值 {}）", line.computed_quantity)
        } else {
            String::new()
        };
        let area = match line.tier {
            PricingTier::Sheet => format!("{} sqft", line.billed_units),
            PricingTier::Unit => line.billed_units.to_string(),
        };
        println!(
            "  {:<16} {:>4}{} | {:>9} | {:<9} | {:>6} | {:>10}",
            line.material.label(),
            line.effective_quantity,
            marker,
            area,
            line.brand,
            line.rate,
            line.cost
        );
    }
    println!();

    let summary = &result.summary;
    println!("💰 成本彙總");
    println!("----------------------------------------");
    println!("  材料費: {}", summary.material_cost.round_dp(2));
    println!("  工資:   {}", summary.labor_cost.round_dp(2));
    println!("  小計:   {}", summary.subtotal.round_dp(2));
    println!("  GST:    {}", summary.gst_amount.round_dp(2));
    println!("  總價:   {}", summary.total_cost.round_dp(2));
    println!();

    // ========== 6. 警告訊息 ==========
    if !result.warnings.is_empty() {
        println!("⚠️  警告訊息:");
        for warning in &result.warnings {
            println!("  - [{}] {}", warning.subject, warning.message);
        }
        println!();
    }

    println!("✅ 估算完成！");

    Ok(())
}
