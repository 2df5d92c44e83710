//! 集成測試

use interior_estimator::prelude::*;
use rstest::rstest;

#[test]
fn test_default_scenario() {
    // 場景：單一預設衣櫃 8 × 8 × 2，預設單價，工資 30%、GST 18%
    let project = Project::default();
    let result = project.estimate().unwrap();

    // 1. 材料等於衣櫃標準配方
    assert_eq!(result.items.len(), 1);
    let wardrobe = StandardRecipe::for_type(FurnitureType::Wardrobe);
    assert_eq!(result.items[0].materials, wardrobe.materials);
    assert_eq!(result.items[0].scale_factor, Decimal::ONE);

    // 2. 材料費
    // pvcLaminate 2 × 150 = 300
    // ply18mm     7 × 32 × 120 = 26880
    // ply12mm     3 × 32 × 100 = 9600
    // blockBoard  2 × 32 × 110 = 7040
    // laminate    3 × 80 = 240
    // innerLam.  12 × 60 = 720
    assert_eq!(result.summary.material_cost, Decimal::from(44780));

    // 3. 工資與 GST
    assert_eq!(result.summary.labor_cost, Decimal::from(13434));
    assert_eq!(result.summary.subtotal, Decimal::from(58214));
    assert_eq!(result.summary.gst_amount, Decimal::new(1047852, 2));
    assert_eq!(result.summary.total_cost, Decimal::new(6869252, 2));

    // 4. 重算結果一致
    let again = project.estimate().unwrap();
    assert_eq!(again.summary, result.summary);
}

#[test]
fn test_multi_item_project() {
    // 場景：衣櫃 + 雙倍尺寸的床 + 半高電視櫃
    let mut project = Project::default();
    project.add_custom_furniture(
        "King Bed",
        FurnitureType::Bed,
        Dimensions::new(Decimal::from(13), Decimal::from(6), Decimal::new(15, 1)),
    );
    project.add_custom_furniture(
        "Low TV Unit",
        FurnitureType::TvUnit,
        Dimensions::new(Decimal::from(8), Decimal::from(6), Decimal::new(375, 3)),
    );

    let result = project.estimate().unwrap();
    assert_eq!(result.items.len(), 3);

    let ply18 = result.material(MaterialKey::Ply18mm).unwrap();
    // 衣櫃 7 + 床 12 + 電視櫃 2
    assert_eq!(ply18.computed_quantity, 21);

    let flexible = result.material(MaterialKey::FlexiblePly).unwrap();
    assert_eq!(flexible.computed_quantity, 2);

    // 電視櫃 1 × 0.5 → 1
    let inner = result.material(MaterialKey::InnerLaminate).unwrap();
    assert_eq!(inner.computed_quantity, 12 + 20 + 1);

    assert!(result.material(MaterialKey::PvcMica).is_none());

    let sum: Decimal = result.priced_lines().map(|line| line.cost).sum();
    assert_eq!(sum, result.summary.material_cost);
}

#[test]
fn test_override_persists_until_cleared() {
    let mut project = Project::default();
    project.set_quantity_override(MaterialKey::Laminate, 10);

    for _ in 0..3 {
        project.add_furniture();
        let result = project.estimate().unwrap();
        let line = result.material(MaterialKey::Laminate).unwrap();
        assert_eq!(line.effective_quantity, 10);
        assert_eq!(line.cost, Decimal::from(800));
    }

    project.clear_quantity_override(MaterialKey::Laminate);
    let result = project.estimate().unwrap();
    let line = result.material(MaterialKey::Laminate).unwrap();
    // 3 + 3 × ceil(0.75)
    assert_eq!(line.effective_quantity, 6);
    assert!(!line.is_overridden());
}

#[test]
fn test_remove_last_item_is_noop() {
    let mut project = Project::default();
    let before = project.items().clone();

    assert!(!project.remove_furniture(1));
    assert_eq!(project.items(), &before);
}

#[test]
fn test_text_inputs_are_coerced() {
    let mut project = Project::default();

    project.update_furniture_field(1, "length", "-8").unwrap();
    project.set_rate_input(MaterialKey::Ply18mm, "abc");
    project.set_gst_input("-18");

    let result = project.estimate().unwrap();
    assert_eq!(result.total_cost(), Decimal::ZERO);
    assert_eq!(project.config().rates.rate(MaterialKey::Ply18mm), Decimal::ZERO);
    assert_eq!(project.config().settings.gst_percentage(), Decimal::ZERO);

    assert!(matches!(
        project.update_furniture_field(1, "depth", "3"),
        Err(EstimatorError::UnknownField(_))
    ));
}

#[rstest]
#[case("wardrobe", FurnitureType::Wardrobe)]
#[case("kitchen", FurnitureType::Kitchen)]
#[case("dresser", FurnitureType::Wardrobe)]
#[case("WARDROBE", FurnitureType::Wardrobe)]
fn test_standard_lookup(#[case] tag: &str, #[case] expected: FurnitureType) {
    let recipe = get_standard_requirements(tag);
    let expected = StandardRecipe::for_type(expected);

    assert_eq!(recipe.standard_size, expected.standard_size);
    assert_eq!(recipe.materials, expected.materials);
}

#[test]
fn test_project_from_json_inputs() {
    let items: FurnitureCollection = serde_json::from_str(
        r#"[
            {"id": 3, "name": "Kitchen", "type": "kitchen", "length": 12, "width": 7, "height": 2},
            {"id": 9, "name": "Side", "type": "sideTable", "length": 1.5, "width": 1.5, "height": 1.5}
        ]"#,
    )
    .unwrap();
    let config = EstimatorConfig::from_json(r#"{"rates": {"aluminumSection": {"rate": 250}}}"#)
        .unwrap();

    let mut project = Project::with_items(config, items);
    assert_eq!(project.add_furniture(), 10);

    let result = project.estimate().unwrap();
    let aluminum = result.material(MaterialKey::AluminumSection).unwrap();
    assert_eq!(aluminum.computed_quantity, 10);
    assert_eq!(aluminum.cost, Decimal::from(2500));
}

#[test]
fn test_ids_stay_unique_at_id_limit() {
    let items: FurnitureCollection = serde_json::from_str(
        r#"[{"id": 18446744073709551615, "name": "Loft", "type": "wardrobe",
             "length": 8, "width": 8, "height": 2}]"#,
    )
    .unwrap();
    let mut project = Project::with_items(EstimatorConfig::default(), items);

    let id = project.add_furniture();
    assert_ne!(id, u64::MAX);

    assert!(project.remove_furniture(u64::MAX));
    assert_eq!(project.items().len(), 1);
    assert!(!project.remove_furniture(id));
    assert_eq!(project.items().len(), 1);
}

#[test]
fn test_override_only_counts_where_material_is_used() {
    let mut project = Project::default();
    project.set_quantity_override(MaterialKey::PvcMica, 6);

    let result = project.estimate().unwrap();
    assert!(result.material(MaterialKey::PvcMica).is_none());
    assert_eq!(project.effective_quantity(MaterialKey::PvcMica).unwrap(), 0);
    assert_eq!(result.summary.material_cost, Decimal::from(44780));
}

#[test]
fn test_sheet_area_follows_override() {
    let mut project = Project::default();

    let result = project.estimate().unwrap();
    assert_eq!(result.material(MaterialKey::Ply12mm).unwrap().billed_units, 3 * 32);
    assert_eq!(result.material(MaterialKey::Laminate).unwrap().billed_units, 3);

    project.set_quantity_input(MaterialKey::Ply12mm, "5");
    let result = project.estimate().unwrap();
    let ply12 = result.material(MaterialKey::Ply12mm).unwrap();
    assert_eq!(ply12.billed_units, 5 * 32);
    assert_eq!(ply12.cost, Decimal::from(5 * 32 * 100));
}

#[test]
fn test_out_of_range_rate_is_not_free() {
    let mut project = Project::default();

    project.set_rate_input(MaterialKey::Laminate, "1e2");
    assert_eq!(project.config().rates.rate(MaterialKey::Laminate), Decimal::from(100));

    project.set_rate_input(MaterialKey::Laminate, "99999999999999999999999999999");
    assert_eq!(project.config().rates.rate(MaterialKey::Laminate), Decimal::MAX);
    assert!(matches!(
        project.estimate(),
        Err(EstimatorError::CalculationError(_))
    ));
}

#[test]
fn test_settings_json_cannot_skip_clamping() {
    let settings: CostSettings =
        serde_json::from_str(r#"{"laborPercentage": -10, "gstPercentage": -18}"#).unwrap();
    let config = EstimatorConfig::default().with_settings(settings);

    let result = Project::new(config).estimate().unwrap();
    assert_eq!(result.total_cost(), result.summary.material_cost);
}
