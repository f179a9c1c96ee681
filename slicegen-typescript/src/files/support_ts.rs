//! Create-once support stubs for the external collaborator boundaries.
//!
//! The shared request helper and the auth-token hook belong to the target
//! project, not to slicegen. Stubs are written only when absent so hand
//! implementations survive reruns.

use std::path::{Path, PathBuf};

use slicegen_core::{FileRules, GeneratedFile};

/// `src/lib/api-client.ts`: the single request helper every generated
/// action delegates to. Owns the bearer token and CSRF header.
pub struct ApiClientTs;

impl GeneratedFile for ApiClientTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src").join("lib").join("api-client.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        r#"// slicegen support stub: replace with the project's real request helper.

const CSRF_COOKIE = "XSRF-TOKEN";

function readCsrfToken(): string {
  if (typeof document === "undefined") {
    return "";
  }
  const match = document.cookie.match(new RegExp(`${CSRF_COOKIE}=([^;]+)`));
  return match ? decodeURIComponent(match[1]) : "";
}

export async function apiRequest<T>(
  path: string,
  options: RequestInit,
  token: string,
): Promise<T> {
  const response = await fetch(path, {
    ...options,
    headers: {
      Accept: "application/json",
      "Content-Type": "application/json",
      Authorization: `Bearer ${token}`,
      "X-XSRF-TOKEN": readCsrfToken(),
      ...options.headers,
    },
  });

  if (!response.ok) {
    throw new Error(`Request failed with status ${response.status}`);
  }

  return (await response.json()) as T;
}
"#
        .to_string()
    }
}

/// `src/lib/auth.ts`: the token hook backed by the external identity
/// provider.
pub struct AuthTs;

impl GeneratedFile for AuthTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src").join("lib").join("auth.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        r#"// slicegen support stub: wire to the project's identity provider.

export function useAuthToken(): string | null {
  if (typeof window === "undefined") {
    return null;
  }
  return window.sessionStorage.getItem("auth_token");
}
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use slicegen_core::{Overwrite, WriteResult};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(
            ApiClientTs.path(Path::new("out")),
            Path::new("out/src/lib/api-client.ts")
        );
        assert_eq!(AuthTs.path(Path::new("out")), Path::new("out/src/lib/auth.ts"));
    }

    #[test]
    fn test_stubs_are_create_once() {
        assert_eq!(ApiClientTs.rules().overwrite, Overwrite::IfMissing);
        assert_eq!(AuthTs.rules().overwrite, Overwrite::IfMissing);
    }

    #[test]
    fn test_hand_edits_survive_rerun() {
        let temp = TempDir::new().unwrap();
        assert_eq!(ApiClientTs.write(temp.path()).unwrap(), WriteResult::Written);

        let path = ApiClientTs.path(temp.path());
        std::fs::write(&path, "// hand written").unwrap();

        assert_eq!(ApiClientTs.write(temp.path()).unwrap(), WriteResult::Skipped);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "// hand written");
    }

    #[test]
    fn test_api_client_attaches_bearer_and_csrf() {
        let code = ApiClientTs.render();
        assert!(code.contains("Authorization: `Bearer ${token}`"));
        assert!(code.contains("\"X-XSRF-TOKEN\": readCsrfToken()"));
        assert!(code.contains("throw new Error(`Request failed with status ${response.status}`);"));
    }
}
