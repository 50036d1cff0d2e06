use crate::models::Role;

/// Vistas navegables de la aplicación (hash routing)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
    Profile,
    AdminDashboard,
    ManagerDashboard,
    EmployeeDashboard,
    ResponsableDashboard,
}

impl Route {
    /// Parsear el fragmento de la URL. Un hash desconocido cae en Login, que
    /// para un usuario conectado rebota a su dashboard via el guard.
    pub fn from_hash(hash: &str) -> Route {
        match hash.trim_start_matches('#') {
            "/home" => Route::Home,
            "/profile" => Route::Profile,
            "/admin-dashboard" => Route::AdminDashboard,
            "/manager-dashboard" => Route::ManagerDashboard,
            "/employee-dashboard" => Route::EmployeeDashboard,
            "/responsable-dashboard" => Route::ResponsableDashboard,
            _ => Route::Login,
        }
    }

    pub fn hash(&self) -> &'static str {
        match self {
            Route::Login => "#/login",
            Route::Home => "#/home",
            Route::Profile => "#/profile",
            Route::AdminDashboard => "#/admin-dashboard",
            Route::ManagerDashboard => "#/manager-dashboard",
            Route::EmployeeDashboard => "#/employee-dashboard",
            Route::ResponsableDashboard => "#/responsable-dashboard",
        }
    }

    /// Única ruta accesible sin sesión
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login)
    }

    /// Lista blanca de roles de la ruta. None = cualquier rol válido.
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Route::Login | Route::Home | Route::Profile => None,
            Route::AdminDashboard => Some(&[Role::Admin]),
            Route::ManagerDashboard => Some(&[Role::Manager]),
            Route::EmployeeDashboard => Some(&[Role::Employe]),
            Route::ResponsableDashboard => Some(&[Role::Responsable]),
        }
    }

    /// Dashboard propio de cada rol. Exhaustivo: todo rol válido tiene
    /// exactamente un home.
    pub fn home_for(role: Role) -> Route {
        match role {
            Role::Admin => Route::AdminDashboard,
            Role::Manager => Route::ManagerDashboard,
            Role::Employe => Route::EmployeeDashboard,
            Role::Responsable => Route::ResponsableDashboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hash_reconoce_todas_las_rutas() {
        assert_eq!(Route::from_hash("#/home"), Route::Home);
        assert_eq!(Route::from_hash("#/admin-dashboard"), Route::AdminDashboard);
        assert_eq!(Route::from_hash("#/manager-dashboard"), Route::ManagerDashboard);
        assert_eq!(Route::from_hash("#/employee-dashboard"), Route::EmployeeDashboard);
        assert_eq!(Route::from_hash("#/responsable-dashboard"), Route::ResponsableDashboard);
        assert_eq!(Route::from_hash("#/profile"), Route::Profile);
    }

    #[test]
    fn hash_desconocido_o_vacio_cae_en_login() {
        assert_eq!(Route::from_hash(""), Route::Login);
        assert_eq!(Route::from_hash("#/"), Route::Login);
        assert_eq!(Route::from_hash("#/nope"), Route::Login);
    }

    #[test]
    fn hash_es_inverso_de_from_hash() {
        for route in [
            Route::Login,
            Route::Home,
            Route::Profile,
            Route::AdminDashboard,
            Route::ManagerDashboard,
            Route::EmployeeDashboard,
            Route::ResponsableDashboard,
        ] {
            assert_eq!(Route::from_hash(route.hash()), route);
        }
    }

    #[test]
    fn cada_rol_tiene_exactamente_un_home() {
        assert_eq!(Route::home_for(Role::Admin), Route::AdminDashboard);
        assert_eq!(Route::home_for(Role::Manager), Route::ManagerDashboard);
        assert_eq!(Route::home_for(Role::Employe), Route::EmployeeDashboard);
        assert_eq!(Route::home_for(Role::Responsable), Route::ResponsableDashboard);
    }

    #[test]
    fn el_home_de_cada_rol_lo_admite() {
        for role in Role::ALL {
            let home = Route::home_for(role);
            let allowed = home.allowed_roles().unwrap();
            assert!(allowed.contains(&role));
        }
    }
}
