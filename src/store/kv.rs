use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::StoreError;

/// 键值存储 trait
///
/// 排行榜只依赖这两个操作：按键读取字符串、按键覆盖写入。
pub trait KeyValueStore {
    /// 读取键对应的值；键不存在时返回 `Ok(None)`
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// 写入（覆盖）键对应的值
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// 内存存储（进程退出即丢失）
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// JSON 文件存储
///
/// 整个存储是一个 JSON 对象文件，打开时一次性载入，每次 `set` 都整体写回。
/// 写回先写临时文件再重命名，避免中途崩溃留下半截文件。
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// 打开存储文件
    ///
    /// 文件不存在或内容损坏时视为空存储，损坏的文件在下一次 `set` 时被覆盖。
    /// 只有其他读取错误才返回 `Err`。
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|source| {
                let err = StoreError::Decode {
                    key: path.display().to_string(),
                    source,
                };
                warn!(error = %err, "store file corrupt, starting empty");
                BTreeMap::new()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let encoded = serde_json::to_string_pretty(&self.entries).map_err(StoreError::Encode)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, encoded)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let previous = self.entries.insert(key.to_string(), value);
        if let Err(err) = self.flush() {
            // 写盘失败时内存与磁盘保持一致
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("a").unwrap(), None);

        store.set("a", "1".to_string()).unwrap();
        store.set("a", "2".to_string()).unwrap();
        assert_eq!(store.get("a").unwrap(), Some("2".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_file_store_persists_across_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let mut store = JsonFileStore::open(&path).unwrap();
            assert_eq!(store.get("k").unwrap(), None);
            store.set("k", "v".to_string()).unwrap();
        }

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn test_file_store_corrupt_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{ truncated").unwrap();

        let mut store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("scores").unwrap(), None);

        // 下一次写入覆盖损坏的文件
        store.set("k", "v".to_string()).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        let entries: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(entries.get("k"), Some(&"v".to_string()));

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_file_store_unreadable_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        // 路径是目录，读取失败且不是 NotFound
        let result = JsonFileStore::open(dir.path());
        assert!(matches!(result, Err(StoreError::Io(_))));
    }

    #[test]
    fn test_file_store_write_failure_keeps_memory_consistent() {
        let dir = tempfile::tempdir().unwrap();
        // 目标路径位于不存在的目录下，写盘必然失败
        let path = dir.path().join("missing").join("store.json");
        let mut store = JsonFileStore::open(&path).unwrap();

        assert!(store.set("k", "v".to_string()).is_err());
        assert_eq!(store.get("k").unwrap(), None);
    }
}
