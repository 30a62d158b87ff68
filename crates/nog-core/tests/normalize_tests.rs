use nog_core::transform::name_normalizer::{normalize_name, route_to_name};

#[test]
fn test_snake_case_operation_id() {
    let n = normalize_name("get_user_by_id");
    assert_eq!(n.camel_case, "getUserById");
    assert_eq!(n.pascal_case, "GetUserById");
}

#[test]
fn test_camel_case_operation_id_is_kept() {
    let n = normalize_name("getPetByPetId");
    assert_eq!(n.camel_case, "getPetByPetId");
    assert_eq!(n.pascal_case, "GetPetByPetId");
}

#[test]
fn test_tag_names() {
    let n = normalize_name("Pet Owners");
    assert_eq!(n.pascal_case, "PetOwners");
    assert_eq!(n.camel_case, "petOwners");
    assert_eq!(n.original, "Pet Owners");

    let n = normalize_name("store-inventory");
    assert_eq!(n.pascal_case, "StoreInventory");
}

#[test]
fn test_synthesized_route_names() {
    let n = normalize_name(&route_to_name("get", "/health"));
    assert_eq!(n.original, "get__health");
    assert_eq!(n.camel_case, "getHealth");

    let n = normalize_name(&route_to_name("PATCH", "/orders/{order-id}/items"));
    assert_eq!(n.original, "patch__orders_order-id_items");
    assert_eq!(n.camel_case, "patchOrdersOrderIdItems");
}

#[test]
fn test_leading_digit() {
    let n = normalize_name("3dModels");
    assert_eq!(n.camel_case, "_3dModels");
    assert_eq!(n.pascal_case, "_3dModels");
}

#[test]
fn test_acronyms_are_recased() {
    let n = normalize_name("getPetByID");
    assert_eq!(n.camel_case, "getPetById");
    assert_eq!(n.pascal_case, "GetPetById");
    assert_eq!(n.original, "getPetByID");
}
