// ============================================================================
// AUTH GATEWAY - interceptor de peticiones salientes (stateless)
// ============================================================================
// Toda llamada al backend pasa por aquí: antes de enviar se adjunta el token
// como credencial Bearer si existe; al recibir, un 401 limpia la sesión y
// redirige al login sin que los call sites tengan que reimplementarlo.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::AuthError;
use crate::routing::{navigate, Route};
use crate::services::SessionStore;
use crate::utils::API_URL;

#[derive(Clone)]
pub struct HttpGateway {
    base_url: String,
    store: SessionStore,
}

impl HttpGateway {
    pub fn new(store: SessionStore) -> Self {
        Self {
            base_url: API_URL.to_string(),
            store,
        }
    }

    pub fn with_base_url(base_url: &str, store: SessionStore) -> Self {
        Self {
            base_url: base_url.to_string(),
            store,
        }
    }

    /// GET autenticado (si hay token) con respuesta JSON
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AuthError> {
        let url = format!("{}{}", self.base_url, path);
        let request = self.attach_token(Request::get(&url));
        let response = request
            .send()
            .await
            .map_err(|e| AuthError::Connexion(e.to_string()))?;
        self.check(response).await
    }

    /// POST con cuerpo JSON. El login pasa por aquí sin token; cualquier otra
    /// llamada lleva la credencial si el store la tiene.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AuthError> {
        let url = format!("{}{}", self.base_url, path);
        let request = self
            .attach_token(Request::post(&url))
            .json(body)
            .map_err(|e| AuthError::Connexion(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| AuthError::Connexion(e.to_string()))?;
        self.check(response).await
    }

    /// Pre-envío: adjuntar la credencial Bearer si el store tiene token;
    /// sin token la petición sale limpia (el backend responderá 401).
    fn attach_token(&self, request: RequestBuilder) -> RequestBuilder {
        match self.store.load_token() {
            Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Post-respuesta: 401 = sesión inválida; el resto pasa al caller.
    async fn check<T: DeserializeOwned>(&self, response: Response) -> Result<T, AuthError> {
        if response.status() == 401 {
            self.handle_unauthorized();
            return Err(AuthError::SessionExpiree);
        }
        if !response.ok() {
            return Err(AuthError::Http(response.status()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| AuthError::Connexion(e.to_string()))
    }

    /// Limpieza + redirección, exactamente una vez. El clear queda persistido
    /// ANTES de redirigir, para que el destino no relea una sesión caduca.
    /// Si el store ya está vacío (otro 401 concurrente, o el timer de
    /// inactividad llegó primero) no se repite la redirección.
    fn handle_unauthorized(&self) {
        if self.store.load_token().is_none() {
            log::info!("ℹ️ 401 con la sesión ya limpia, se ignora");
            return;
        }
        log::warn!("⚠️ 401 del backend: token rechazado, limpiando sesión");
        self.store.clear();
        crate::notify_session_expired();
        navigate(Route::Login);
    }
}
