//! Path resolution.

use nestview_engine::{Container, ReadTxn};

use crate::{Error, Path};

/// Resolve `path` to a handle on its innermost container.
///
/// The first name is looked up in the root namespace, each following name
/// inside the container before it. Resolution stops at the first name that
/// is not a container and reports it as [`Error::NotFound`]; later names are
/// never consulted. The empty path resolves to the root namespace.
pub fn resolve<'txn>(
    txn: &'txn dyn ReadTxn,
    path: &Path,
) -> Result<Box<dyn Container<'txn> + 'txn>, Error> {
    let mut current = txn.root();
    for (depth, name) in path.iter().enumerate() {
        current = match current.container(name)? {
            Some(next) => next,
            None => {
                let name = String::from_utf8_lossy(name).into_owned();
                tracing::debug!(%path, name = %name, depth, "container not found");
                return Err(Error::NotFound { name, depth });
            }
        };
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use nestview_engine::{Engine, MemoryBucket, MemoryEngine};

    fn engine() -> MemoryEngine {
        MemoryEngine::new(
            MemoryBucket::new().with_bucket(
                "users",
                MemoryBucket::new()
                    .with_value("alice", "1")
                    .with_bucket("teams", MemoryBucket::new().with_value("core", "x")),
            ),
        )
    }

    fn first_key(container: &dyn Container<'_>) -> Option<String> {
        let mut cursor = container.cursor().unwrap();
        cursor
            .first()
            .unwrap()
            .map(|(k, _)| String::from_utf8(k.to_vec()).unwrap())
    }

    #[test]
    fn empty_path_is_root() {
        let engine = engine();
        let txn = engine.begin_read().unwrap();
        let root = resolve(txn.as_ref(), &Path::root()).unwrap();
        assert_eq!(first_key(root.as_ref()), Some("users".to_string()));
    }

    #[test]
    fn resolves_nested_containers() {
        let engine = engine();
        let txn = engine.begin_read().unwrap();
        let teams = resolve(txn.as_ref(), &path!("users/teams")).unwrap();
        assert_eq!(first_key(teams.as_ref()), Some("core".to_string()));
    }

    #[test]
    fn missing_first_segment_names_it() {
        let engine = engine();
        let txn = engine.begin_read().unwrap();
        let err = resolve(txn.as_ref(), &path!("nobody/teams")).err().unwrap();
        match err {
            Error::NotFound { name, depth } => {
                assert_eq!(name, "nobody");
                assert_eq!(depth, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_inner_segment_names_it() {
        let engine = engine();
        let txn = engine.begin_read().unwrap();
        let err = resolve(txn.as_ref(), &path!("users/teams/ghost/deeper"))
            .err()
            .unwrap();
        assert!(matches!(err, Error::NotFound { ref name, depth: 2 } if name == "ghost"));
    }

    #[test]
    fn leaf_is_not_a_container() {
        let engine = engine();
        let txn = engine.begin_read().unwrap();
        let err = resolve(txn.as_ref(), &path!("users/alice")).err().unwrap();
        assert_eq!(err.to_string(), "container \"alice\" not found");
    }
}
