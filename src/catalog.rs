//! Ready-made sample descriptors.
//!
//! An order-processing object graph exercising everything the generator
//! handles: nested composites, collections, maps, enums, nullable members,
//! derived members, and an abstract (override-only) member. Used by the CLI
//! and the integration tests.

use crate::descriptor::{Composite, TypeDescriptor};
use crate::registry::Registry;

/// CLI-facing names of the generatable sample types.
pub const TYPES: &[&str] = &["order", "order-item", "product", "quantity", "discount", "status"];

/// Registry holding the whole sample graph.
pub fn registry() -> Registry {
    Registry::new()
        .with(
            "Status",
            TypeDescriptor::enumeration(
                "Status",
                ["Pending", "Confirmed", "Processing", "Shipped", "Delivered", "Cancelled"],
            ),
        )
        .with(
            "Product",
            Composite::new("Product")
                .field("name", TypeDescriptor::word())
                .field("sku", TypeDescriptor::styled_string(
                    crate::descriptor::StringStyle::Plain { max_len: 12 },
                ))
                .field("price", TypeDescriptor::float(5.0, 500.0)),
        )
        .with(
            "Quantity",
            Composite::new("Quantity").field("value", TypeDescriptor::int(1, 100)),
        )
        .with(
            "Discount",
            Composite::new("Discount")
                .field("code", TypeDescriptor::word())
                .field("amount", TypeDescriptor::float(0.05, 0.5)),
        )
        .with(
            "OrderItem",
            Composite::new("OrderItem")
                .field("product", TypeDescriptor::reference("Product"))
                .field("quantity", TypeDescriptor::reference("Quantity"))
                .field(
                    "discounts",
                    TypeDescriptor::map(
                        TypeDescriptor::int(1, 50),
                        TypeDescriptor::float(0.05, 0.5),
                    ),
                )
                .field("most_effective_at", TypeDescriptor::time())
                .field("most_effective_on", TypeDescriptor::date()),
        )
        .with(
            "Order",
            Composite::new("Order")
                .field("timestamp", TypeDescriptor::datetime())
                .field("id", TypeDescriptor::int(1, 100_000))
                .field("calculator", TypeDescriptor::abstract_type("Calculator"))
                .field("code", TypeDescriptor::nullable(TypeDescriptor::uuid()))
                .field("status", TypeDescriptor::reference("Status"))
                .field("discounts", TypeDescriptor::list(TypeDescriptor::reference("Discount")))
                .field("items", TypeDescriptor::list(TypeDescriptor::reference("OrderItem")))
                .field("date_created", TypeDescriptor::datetime())
                .field("comments", TypeDescriptor::list(TypeDescriptor::sentence()))
                .derived_field("total", TypeDescriptor::float(0.0, 0.0)),
        )
}

/// Resolve a CLI-facing type name to a descriptor reference.
pub fn descriptor_for(name: &str) -> Option<TypeDescriptor> {
    let canonical = match name.to_lowercase().as_str() {
        "order" => "Order",
        "order-item" | "orderitem" => "OrderItem",
        "product" => "Product",
        "quantity" => "Quantity",
        "discount" => "Discount",
        "status" => "Status",
        _ => return None,
    };
    Some(TypeDescriptor::reference(canonical))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_cli_names_resolve() {
        let registry = registry();
        for name in TYPES {
            let ty = descriptor_for(name).expect("catalog name should resolve");
            let registered = ty.name().expect("catalog descriptors are named");
            assert!(registry.contains(registered), "{} not registered", registered);
        }
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert!(descriptor_for("spaceship").is_none());
    }
}
