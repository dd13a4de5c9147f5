use crate::prelude::*;

///
/// SymbolTable
///
/// Flat, read-only snapshot of the host program's declarations for one
/// analysis pass. Classes form a forest through nullable parent indices;
/// a base id must already exist when the class is inserted, so the
/// ancestor walk is a plain index-following loop with no cycle risk.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SymbolTable {
    classes: Vec<ClassSymbol>,
    fields: Vec<FieldSymbol>,
    decls: Vec<FieldDecl>,
}

impl SymbolTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_class(&mut self, class: ClassSymbol) -> Result<ClassId, NodeError> {
        if let Some(base) = class.base {
            self.check_class(base)?;
        }

        let id = ClassId(self.classes.len());
        self.classes.push(class);

        Ok(id)
    }

    /// Expand a declaration site into field symbols, one per declared
    /// name, in written order.
    pub fn insert_decl(&mut self, class: ClassId, spec: DeclSpec) -> Result<Vec<FieldId>, NodeError> {
        self.check_class(class)?;

        let markers: MarkerList = spec.markers.into_iter().collect();
        let mut ids = Vec::with_capacity(spec.names.len());

        for name in spec.names {
            let id = FieldId(self.fields.len());
            self.fields.push(FieldSymbol {
                class,
                name,
                category: spec.category,
                accessibility: spec.accessibility,
                storage: spec.storage,
                markers: markers.clone(),
            });
            ids.push(id);
        }

        self.decls.push(FieldDecl {
            class,
            fields: ids.clone(),
        });

        Ok(ids)
    }

    #[must_use]
    pub fn class(&self, id: ClassId) -> &ClassSymbol {
        &self.classes[id.index()]
    }

    #[must_use]
    pub fn field(&self, id: FieldId) -> &FieldSymbol {
        &self.fields[id.index()]
    }

    /// Declaration sites in written order.
    pub fn decls(&self) -> impl Iterator<Item = &FieldDecl> {
        self.decls.iter()
    }

    /// Strict ancestors of a class, nearest base first, root last.
    pub fn ancestors(&self, id: ClassId) -> impl Iterator<Item = ClassId> + '_ {
        let mut next = self.class(id).base;

        std::iter::from_fn(move || {
            let current = next?;
            next = self.class(current).base;
            Some(current)
        })
    }

    #[must_use]
    pub fn class_path(&self, id: ClassId) -> String {
        self.class(id).path()
    }

    #[must_use]
    pub fn field_path(&self, id: FieldId) -> String {
        let field = self.field(id);

        format!("{}.{}", self.class_path(field.class), field.name)
    }

    fn check_class(&self, id: ClassId) -> Result<(), NodeError> {
        if id.index() < self.classes.len() {
            Ok(())
        } else {
            Err(NodeError::UnknownClass(id))
        }
    }
}
