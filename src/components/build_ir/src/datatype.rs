use crate::{BuildError, BuildErrorKind, ModBuilder};

impl ModBuilder<'_> {
    /// Resolves a written type.
    ///
    /// Named types resolve to their identity, so a type may refer to itself
    /// or to types defined later without being expanded here.
    pub fn resolve_type(&self, ast_type: &ast::Type) -> Result<ir::Type, BuildError> {
        Ok(match &ast_type.kind {
            ast::TypeKind::Void => ir::Type::Void,
            ast::TypeKind::Label => ir::Type::Label,
            ast::TypeKind::Integer(bits) => ir::Type::Integer(*bits),
            ast::TypeKind::Float(kind) => ir::Type::Float(*kind),
            ast::TypeKind::Ptr(ptr) => ir::Type::Ptr(ir::PtrType {
                pointee: Box::new(self.resolve_type(&ptr.pointee)?),
                addr_space: ptr.addr_space,
            }),
            ast::TypeKind::Array(len, elem) => {
                ir::Type::Array(*len, Box::new(self.resolve_type(elem)?))
            }
            ast::TypeKind::Vector(len, elem) => {
                ir::Type::Vector(*len, Box::new(self.resolve_type(elem)?))
            }
            ast::TypeKind::Struct(structure) => ir::Type::Struct(ir::StructType {
                fields: structure
                    .fields
                    .iter()
                    .map(|field| self.resolve_type(field))
                    .collect::<Result<_, _>>()?,
                is_packed: structure.is_packed,
            }),
            ast::TypeKind::Func(func) => ir::Type::Func(Box::new(ir::FuncType {
                params: func
                    .params
                    .iter()
                    .map(|param| self.resolve_type(param))
                    .collect::<Result<_, _>>()?,
                return_type: self.resolve_type(&func.return_type)?,
                is_variadic: func.is_variadic,
            })),
            ast::TypeKind::Named(name) => ir::Type::Named(self.types.get(name).ok_or_else(|| {
                BuildErrorKind::UnknownType { name: name.clone() }.at(ast_type.source)
            })?),
        })
    }

    /// Resolves a type and looks through any named types to its structure.
    pub fn structural(&self, ty: &ir::Type) -> Option<ir::Type> {
        self.module.structural(ty).cloned()
    }
}
