use minijinja::context;
use nog_core::ir::{IrModel, IrSpec};

use super::{import_context, model_imports, render};
use crate::type_mapper::{ir_type_to_ts, property_key};

/// Emit `models/{name}.model.ts`: an exported interface for a schema, with
/// imports for the other known models its fields reference.
pub fn emit_model(ir: &IrSpec, model: &IrModel) -> Result<String, minijinja::Error> {
    let imports: Vec<minijinja::Value> =
        model_imports(ir, model.fields.iter().map(|f| &f.field_type))
            .into_iter()
            .filter(|m| m.name != model.name)
            .map(import_context)
            .collect();

    let fields: Vec<minijinja::Value> = model
        .fields
        .iter()
        .map(|f| {
            context! {
                key => property_key(&f.name),
                type => ir_type_to_ts(&f.field_type),
                required => f.required,
                description => f.description.clone(),
            }
        })
        .collect();

    render(
        "model.ts.j2",
        context! {
            name => model.type_name(),
            description => model.description.clone(),
            fields => fields,
            imports => imports,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nog_core::{parse, transform};

    const SPEC: &str = r##"
openapi: 3.0.0
paths: {}
components:
  schemas:
    Pet:
      type: object
      description: A pet in the store
      required: [id, name]
      properties:
        id:
          type: integer
        name:
          type: string
          description: Display name
        tags:
          type: array
          items: { type: string }
        owner:
          $ref: "#/components/schemas/Owner"
        parent:
          $ref: "#/components/schemas/Pet"
        in-stock:
          type: boolean
        extra: {}
    Owner:
      type: object
      properties:
        pets:
          type: array
          items: { $ref: "#/components/schemas/Pet" }
        ghost:
          $ref: "#/components/schemas/Missing"
    Empty:
      type: object
"##;

    fn emit(name: &str) -> String {
        let ir = transform::transform(&parse::from_yaml(SPEC).unwrap()).unwrap();
        let model = ir.find_model(name).unwrap();
        emit_model(&ir, model).unwrap()
    }

    #[test]
    fn test_pet_model() {
        let out = emit("Pet");
        assert_eq!(
            out,
            "import { Owner } from './owner.model';\n\
             \n\
             /** A pet in the store */\n\
             export interface Pet {\n  \
               id: number;\n  \
               /** Display name */\n  \
               name: string;\n  \
               tags?: string[];\n  \
               owner?: Owner;\n  \
               parent?: Pet;\n  \
               'in-stock'?: boolean;\n  \
               extra?: any;\n\
             }\n"
        );
    }

    #[test]
    fn test_unknown_refs_not_imported() {
        let out = emit("Owner");
        assert!(out.starts_with("import { Pet } from './pet.model';\n\nexport interface Owner {\n"));
        assert!(out.contains("  pets?: Pet[];\n"));
        assert!(out.contains("  ghost?: Missing;\n"));
        assert!(!out.contains("missing.model"));
    }

    #[test]
    fn test_empty_model() {
        assert_eq!(emit("Empty"), "export interface Empty {\n}\n");
    }

    #[test]
    fn test_non_identifier_schema_names() {
        let spec = r##"
openapi: 3.0.0
paths: {}
components:
  schemas:
    pet-dto:
      type: object
      properties:
        page:
          $ref: "#/components/schemas/Page«Pet»"
    Page«Pet»:
      type: object
      properties:
        items:
          type: array
          items: { $ref: "#/components/schemas/pet-dto" }
"##;
        let ir = transform::transform(&parse::from_yaml(spec).unwrap()).unwrap();

        let dto = emit_model(&ir, ir.find_model("pet-dto").unwrap()).unwrap();
        assert_eq!(
            dto,
            "import { PagePet } from './page«pet».model';\n\
             \n\
             export interface PetDto {\n  \
               page?: PagePet;\n\
             }\n"
        );

        let page = emit_model(&ir, ir.find_model("Page«Pet»").unwrap()).unwrap();
        assert!(page.starts_with("import { PetDto } from './pet-dto.model';\n"));
        assert!(page.contains("export interface PagePet {\n  items?: PetDto[];\n"));
    }
}
