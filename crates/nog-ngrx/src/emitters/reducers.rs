use minijinja::context;
use nog_core::ir::{IrSpec, TagGroup};

use super::{group_model_imports, operation_context, render, tag_context};

/// Emit `reducers/{tag}.reducer.ts` with the group's state and reducer.
pub fn emit_reducer(ir: &IrSpec, group: &TagGroup) -> Result<String, minijinja::Error> {
    let operations: Vec<minijinja::Value> =
        ir.group_operations(group).map(operation_context).collect();

    render(
        "reducer.ts.j2",
        context! {
            tag => tag_context(group),
            model_imports => group_model_imports(ir, group),
            operations => operations,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nog_core::{parse, transform};

    const SPEC: &str = r##"
openapi: 3.0.0
paths:
  /pets/{petId}:
    get:
      operationId: getPetByPetId
      tags: [pets]
      responses:
        "200":
          content:
            application/json:
              schema: { $ref: "#/components/schemas/Pet" }
  /pets:
    get:
      operationId: listPets
      tags: [pets]
      responses:
        "200":
          content:
            application/json:
              schema:
                type: array
                items: { $ref: "#/components/schemas/Pet" }
"##;

    fn emit() -> String {
        let ir = transform::transform(&parse::from_yaml(SPEC).unwrap()).unwrap();
        emit_reducer(&ir, &ir.groups[0]).unwrap()
    }

    #[test]
    fn test_state_shape() {
        let out = emit();
        assert!(out.contains("import * as PetsActions from '../actions/pets.actions';\n"));
        assert!(out.contains(
            "export interface PetsState {\n  loading: boolean;\n  error: any;\n  getPetByPetIdData: Pet | null;\n  listPetsData: Pet[] | null;\n}\n"
        ));
    }

    #[test]
    fn test_no_model_import_without_models() {
        // Pet is referenced but not defined, so nothing is imported
        assert!(!emit().contains("from '../models/"));
    }

    #[test]
    fn test_initial_state() {
        let out = emit();
        assert!(out.contains(
            "export const initialPetsState: PetsState = {\n  loading: false,\n  error: null,\n  getPetByPetIdData: null,\n  listPetsData: null,\n};\n"
        ));
    }

    #[test]
    fn test_transitions() {
        let out = emit();
        assert!(out.contains("export const petsReducer = createReducer(\n  initialPetsState,\n"));
        assert!(out.contains(
            "  on(PetsActions.getPetByPetId, (state) => ({\n    ...state,\n    loading: true,\n    error: null\n  })),\n"
        ));
        assert!(out.contains(
            "  on(PetsActions.getPetByPetIdSuccess, (state, { data }) => ({\n    ...state,\n    loading: false,\n    getPetByPetIdData: data\n  })),\n"
        ));
        assert!(out.contains(
            "  on(PetsActions.getPetByPetIdFailure, (state, { error }) => ({\n    ...state,\n    loading: false,\n    error\n  })),\n"
        ));
        assert_eq!(out.matches("  on(").count(), 6);
        assert!(out.ends_with("  })),\n);\n"));
    }
}
