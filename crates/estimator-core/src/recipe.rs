//! 標準材料配方
//!
//! 每種家具類型有一份固定的標準尺寸與對應的材料用量，
//! 實際用量依體積比例由標準配方推算。

use rust_decimal::Decimal;
use serde::Serialize;

use crate::furniture::{Dimensions, FurnitureType};
use crate::material::{MaterialKey, MaterialQuantities};

/// 標準配方
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandardRecipe {
    /// 家具類型
    pub furniture_type: FurnitureType,

    /// 標準尺寸（英尺）
    pub standard_size: Dimensions,

    /// 標準尺寸下的材料用量
    pub materials: MaterialQuantities,
}

impl StandardRecipe {
    fn new(
        furniture_type: FurnitureType,
        standard_size: Dimensions,
        materials: &[(MaterialKey, u64)],
    ) -> Self {
        Self {
            furniture_type,
            standard_size,
            materials: materials.iter().copied().collect(),
        }
    }

    /// 取得家具類型的標準配方
    pub fn for_type(furniture_type: FurnitureType) -> Self {
        use MaterialKey::*;

        match furniture_type {
            FurnitureType::Wardrobe => Self::new(
                furniture_type,
                Dimensions::from_feet(8, 8, 2),
                &[
                    (PvcLaminate, 2),
                    (Ply18mm, 7),
                    (Ply12mm, 3),
                    (BlockBoard, 2),
                    (Laminate, 3),
                    (InnerLaminate, 12),
                ],
            ),
            FurnitureType::Bed => Self::new(
                furniture_type,
                Dimensions::new(Decimal::new(65, 1), Decimal::from(6), Decimal::new(15, 1)),
                &[
                    (PvcLaminate, 4),
                    (Ply18mm, 6),
                    (Ply12mm, 2),
                    (Laminate, 1),
                    (InnerLaminate, 10),
                    (FlexiblePly, 1),
                ],
            ),
            FurnitureType::SideTable => Self::new(
                furniture_type,
                Dimensions::new(Decimal::new(15, 1), Decimal::new(15, 1), Decimal::new(15, 1)),
                &[
                    (PvcLaminate, 1),
                    (Ply18mm, 2),
                    (Ply12mm, 1),
                    (Laminate, 1),
                    (InnerLaminate, 2),
                ],
            ),
            FurnitureType::Kitchen => Self::new(
                furniture_type,
                Dimensions::from_feet(12, 7, 2),
                &[
                    (PvcMica, 4),
                    (Ply18mm, 6),
                    (Ply12mm, 3),
                    (Laminate, 5),
                    (InnerLaminate, 8),
                    (AluminumSection, 10),
                ],
            ),
            FurnitureType::TvUnit => Self::new(
                furniture_type,
                Dimensions::new(Decimal::from(8), Decimal::from(6), Decimal::new(75, 2)),
                &[
                    (PvcLaminate, 2),
                    (Ply18mm, 4),
                    (Ply12mm, 1),
                    (Laminate, 3),
                    (InnerLaminate, 1),
                ],
            ),
        }
    }

    /// 配方是否使用某材料
    pub fn uses(&self, material: MaterialKey) -> bool {
        self.materials.contains_key(&material)
    }
}

/// 依標籤取得標準配方，未知標籤回傳衣櫃配方
pub fn get_standard_requirements(tag: &str) -> StandardRecipe {
    StandardRecipe::for_type(FurnitureType::from_tag(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FurnitureType::Wardrobe, 6, Decimal::from(128))]
    #[case(FurnitureType::Bed, 6, Decimal::new(585, 1))]
    #[case(FurnitureType::SideTable, 5, Decimal::new(3375, 3))]
    #[case(FurnitureType::Kitchen, 6, Decimal::from(168))]
    #[case(FurnitureType::TvUnit, 5, Decimal::from(36))]
    fn test_recipe_table(
        #[case] furniture_type: FurnitureType,
        #[case] material_count: usize,
        #[case] standard_volume: Decimal,
    ) {
        let recipe = StandardRecipe::for_type(furniture_type);

        assert_eq!(recipe.furniture_type, furniture_type);
        assert_eq!(recipe.materials.len(), material_count);
        assert_eq!(recipe.standard_size.volume().unwrap(), standard_volume);
        assert!(recipe.materials.values().all(|&qty| qty > 0));
    }

    #[test]
    fn test_wardrobe_recipe() {
        let recipe = StandardRecipe::for_type(FurnitureType::Wardrobe);

        assert_eq!(recipe.materials[&MaterialKey::Ply18mm], 7);
        assert_eq!(recipe.materials[&MaterialKey::InnerLaminate], 12);
        assert!(!recipe.uses(MaterialKey::PvcMica));
    }

    #[test]
    fn test_unknown_tag_falls_back_to_wardrobe() {
        let recipe = get_standard_requirements("gazebo");
        let wardrobe = StandardRecipe::for_type(FurnitureType::Wardrobe);

        assert_eq!(recipe.standard_size, wardrobe.standard_size);
        assert_eq!(recipe.materials, wardrobe.materials);
    }

    #[test]
    fn test_kitchen_uses_mica_and_aluminum() {
        let recipe = get_standard_requirements("kitchen");

        assert!(recipe.uses(MaterialKey::PvcMica));
        assert_eq!(recipe.materials[&MaterialKey::AluminumSection], 10);
        assert!(!recipe.uses(MaterialKey::PvcLaminate));
    }
}
