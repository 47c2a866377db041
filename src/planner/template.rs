use crate::models::{Meal, MealItem, NutritionSchema};

/// Summed kcal of [`default_template`].
pub const DEFAULT_TEMPLATE_KCAL: f64 = 2446.4;

/// The reference five-meal plan that client schemas are scaled from.
///
/// Built fresh on each call; callers pass it to the scaler explicitly.
pub fn default_template() -> NutritionSchema {
    NutritionSchema::new(vec![
        Meal::new(
            "Måltid 1",
            vec![
                MealItem::new("Havregryn", 50.0, 6.5, 3.5, 29.0, 185.0),
                MealItem::new("Skyr", 200.0, 22.0, 0.4, 8.0, 122.0),
                MealItem::new("Blåbær", 100.0, 0.7, 0.3, 14.5, 57.0),
            ],
        ),
        Meal::new(
            "Måltid 2",
            vec![
                MealItem::new("Rugbrød", 100.0, 6.0, 3.0, 40.0, 215.0),
                MealItem::new("Æg", 120.0, 15.0, 12.0, 0.8, 186.0),
                MealItem::new("Avocado", 50.0, 1.0, 7.5, 1.0, 80.0),
                MealItem::new("Smør", 10.0, 0.1, 8.1, 0.1, 74.0),
                MealItem::new("Ost 17%", 30.0, 8.1, 5.1, 0.0, 80.0),
            ],
        ),
        Meal::new(
            "Måltid 3",
            vec![
                MealItem::new("Kyllingebryst", 150.0, 34.5, 2.3, 0.0, 170.9),
                MealItem::new("Ris, kogt", 200.0, 5.4, 0.6, 56.0, 260.0),
                MealItem::new("Broccoli", 150.0, 4.2, 0.6, 7.2, 51.0),
                MealItem::new("Olivenolie", 10.0, 0.0, 10.0, 0.0, 88.4),
            ],
        ),
        Meal::new(
            "Måltid 4",
            vec![
                MealItem::new("Proteinpulver", 30.0, 24.0, 1.5, 2.4, 117.0),
                MealItem::new("Banan", 120.0, 1.3, 0.4, 27.6, 106.8),
                MealItem::new("Mandler", 20.0, 4.2, 10.0, 1.4, 115.8),
            ],
        ),
        Meal::new(
            "Måltid 5",
            vec![
                MealItem::new("Laks", 150.0, 30.0, 19.5, 0.0, 312.0),
                MealItem::new("Kartofler", 250.0, 5.0, 0.3, 42.5, 192.5),
                MealItem::new("Grøntsager", 150.0, 1.5, 0.3, 6.0, 33.0),
            ],
        ),
    ])
}
