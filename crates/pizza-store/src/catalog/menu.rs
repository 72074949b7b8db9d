use crate::model::Product;

const IMAGE_HOST: &str = "https://images.unsplash.com";

fn image(photo: &str) -> String {
    format!("{IMAGE_HOST}/{photo}?w=800")
}

pub(super) fn pizzas() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Margherita",
            12.0,
            &["tomato", "mozzarella", "basil"],
            image("photo-1604382355076-af4b0eb60143"),
        ),
        Product::new(
            2,
            "Pepperoni",
            15.0,
            &["tomato", "mozzarella", "pepperoni"],
            image("photo-1628840042765-356cda07504e"),
        ),
        Product::new(
            3,
            "Hawaiian",
            14.0,
            &["tomato", "mozzarella", "ham", "pineapple"],
            image("photo-1513104890138-7c749659a591"),
        ),
        Product::new(
            4,
            "Vegetarian",
            13.0,
            &["tomato", "mozzarella", "mushrooms", "bell peppers", "olives"],
            image("photo-1574071318508-1cdbab80d002"),
        ),
        Product::new(
            5,
            "BBQ Chicken",
            16.0,
            &["bbq sauce", "mozzarella", "chicken", "red onions"],
            image("photo-1565299624946-b28f40a0ca4b"),
        ),
        Product::new(
            6,
            "Supreme",
            18.0,
            &[
                "tomato",
                "mozzarella",
                "pepperoni",
                "sausage",
                "mushrooms",
                "bell peppers",
                "olives",
            ],
            image("photo-1593560708920-61dd98c46a4e"),
        ),
    ]
}
