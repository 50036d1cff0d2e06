// ============================================================================
// ROL DE USUARIO - conjunto cerrado
// ============================================================================

/// Los cuatro roles reconocidos por el backend. Cualquier otro valor
/// almacenado se considera sesión manipulada y fuerza el logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Manager,
    Responsable,
    Employe,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Manager, Role::Responsable, Role::Employe];

    /// Parsear el valor tal cual llega del backend o del storage.
    /// Este parse es LA verificación de validez de rol (isValidRole).
    pub fn parse(raw: &str) -> Option<Role> {
        match raw.trim().to_uppercase().as_str() {
            "ADMIN" => Some(Role::Admin),
            "MANAGER" => Some(Role::Manager),
            "RESPONSABLE" => Some(Role::Responsable),
            "EMPLOYE" => Some(Role::Employe),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::Responsable => "RESPONSABLE",
            Role::Employe => "EMPLOYE",
        }
    }

    /// Etiqueta para la UI
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrateur",
            Role::Manager => "Manager",
            Role::Responsable => "Responsable",
            Role::Employe => "Employé",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_acepta_los_cuatro_roles() {
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("MANAGER"), Some(Role::Manager));
        assert_eq!(Role::parse("RESPONSABLE"), Some(Role::Responsable));
        assert_eq!(Role::parse("EMPLOYE"), Some(Role::Employe));
    }

    #[test]
    fn parse_normaliza_mayusculas_y_espacios() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse(" employe "), Some(Role::Employe));
    }

    #[test]
    fn parse_rechaza_roles_desconocidos() {
        assert_eq!(Role::parse("SUPERUSER"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("user"), None);
    }

    #[test]
    fn as_str_es_inverso_de_parse() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }
}
