//! The in-memory filesystem.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use repofs_core::address;
use repofs_core::{ChangeEvent, ChangeKind, ChangeSink, FileKind, FileStat, FileSystem, FsError,
    NoSink, RenameOptions, WriteOptions};

use crate::entry::{now_millis, DirNode, Entry, FileNode};
use crate::notify::ChangeNotifier;

/// An in-memory filesystem behind the same interface as the remote client.
///
/// The host component of an address routes to this provider and is otherwise
/// ignored; only the path is consulted. Unlike the remote variant, the
/// create/overwrite flags are enforced here, and stats carry real sizes and
/// timestamps. Mutations are reported to the [`ChangeSink`] in debounced
/// batches.
///
/// # Example
///
/// ```rust
/// use repofs_core::{FileSystem, WriteOptions};
/// use repofs_memfs::MemFs;
///
/// let fs = MemFs::new();
/// fs.write_file("memfs://demo/hello.txt", b"hi", WriteOptions::default()).unwrap();
/// assert_eq!(fs.read_file("memfs://demo/hello.txt").unwrap(), b"hi");
/// ```
pub struct MemFs {
    root: Mutex<Entry>,
    notifier: ChangeNotifier,
}

impl MemFs {
    /// An empty filesystem that drops its change events.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(NoSink))
    }

    /// An empty filesystem publishing batched change events to `sink`.
    pub fn with_sink(sink: Arc<dyn ChangeSink>) -> Self {
        Self {
            root: Mutex::new(Entry::Directory(DirNode::new())),
            notifier: ChangeNotifier::with_default_window(sink),
        }
    }

    /// Like `with_sink`, with an explicit debounce window.
    pub fn with_sink_and_window(sink: Arc<dyn ChangeSink>, window: Duration) -> Self {
        Self {
            root: Mutex::new(Entry::Directory(DirNode::new())),
            notifier: ChangeNotifier::new(sink, window),
        }
    }

    fn path_of(addr: &str) -> Result<String, FsError> {
        Ok(address::resolve(addr)?.path)
    }
}

impl Default for MemFs {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup<'a>(mut entry: &'a Entry, path: &str) -> Result<&'a Entry, FsError> {
    for part in path.split('/').filter(|p| !p.is_empty()) {
        match entry {
            Entry::Directory(dir) => {
                entry = dir
                    .entries
                    .get(part)
                    .ok_or_else(|| FsError::not_found(path))?;
            }
            Entry::File(_) => return Err(FsError::file_not_a_directory(path)),
        }
    }
    Ok(entry)
}

fn lookup_dir_mut<'a>(mut entry: &'a mut Entry, path: &str) -> Result<&'a mut DirNode, FsError> {
    for part in path.split('/').filter(|p| !p.is_empty()) {
        match entry {
            Entry::Directory(dir) => {
                entry = dir
                    .entries
                    .get_mut(part)
                    .ok_or_else(|| FsError::not_found(path))?;
            }
            Entry::File(_) => return Err(FsError::file_not_a_directory(path)),
        }
    }
    match entry {
        Entry::Directory(dir) => Ok(dir),
        Entry::File(_) => Err(FsError::file_not_a_directory(path)),
    }
}

impl FileSystem for MemFs {
    fn stat(&self, addr: &str) -> Result<FileStat, FsError> {
        let path = Self::path_of(addr)?;
        let root = self.root.lock().unwrap();
        Ok(lookup(&root, &path)?.stat())
    }

    fn read_directory(&self, addr: &str) -> Result<Vec<(String, FileKind)>, FsError> {
        let path = Self::path_of(addr)?;
        let root = self.root.lock().unwrap();
        match lookup(&root, &path)? {
            Entry::Directory(dir) => Ok(dir
                .entries
                .iter()
                .map(|(name, entry)| (name.clone(), entry.kind()))
                .collect()),
            Entry::File(_) => Err(FsError::file_not_a_directory(path)),
        }
    }

    fn read_file(&self, addr: &str) -> Result<Vec<u8>, FsError> {
        let path = Self::path_of(addr)?;
        let root = self.root.lock().unwrap();
        match lookup(&root, &path)? {
            Entry::File(file) => Ok(file.data.clone()),
            Entry::Directory(_) => Err(FsError::file_is_a_directory(path)),
        }
    }

    fn write_file(
        &self,
        addr: &str,
        content: &[u8],
        options: WriteOptions,
    ) -> Result<(), FsError> {
        let path = Self::path_of(addr)?;
        let name = address::basename(&path).to_string();
        if name.is_empty() {
            return Err(FsError::file_is_a_directory(path));
        }

        let mut events = Vec::new();
        {
            let mut root = self.root.lock().unwrap();
            let parent = lookup_dir_mut(&mut root, address::parent(&path))?;

            match parent.entries.get_mut(&name) {
                Some(Entry::Directory(_)) => {
                    return Err(FsError::file_is_a_directory(path));
                }
                Some(Entry::File(file)) => {
                    if options.create && !options.overwrite {
                        return Err(FsError::file_exists(path));
                    }
                    file.data = content.to_vec();
                    file.mtime = now_millis();
                }
                None => {
                    if !options.create {
                        return Err(FsError::not_found(path));
                    }
                    parent
                        .entries
                        .insert(name, Entry::File(FileNode::new(content.to_vec())));
                    events.push(ChangeEvent::new(ChangeKind::Created, path.clone()));
                }
            }
        }
        events.push(ChangeEvent::new(ChangeKind::Changed, path));
        self.notifier.emit(events);
        Ok(())
    }

    fn rename(&self, old: &str, new: &str, options: RenameOptions) -> Result<(), FsError> {
        let old_path = Self::path_of(old)?;
        let new_path = Self::path_of(new)?;
        let new_name = address::basename(&new_path).to_string();
        if new_name.is_empty() {
            return Err(FsError::invalid_address(format!(
                "{}: move target has no name",
                new
            )));
        }

        {
            let mut root = self.root.lock().unwrap();

            lookup(&root, &old_path)?;
            if !options.overwrite && lookup(&root, &new_path).is_ok() {
                return Err(FsError::file_exists(new_path));
            }

            let old_parent = lookup_dir_mut(&mut root, address::parent(&old_path))?;
            let entry = old_parent
                .entries
                .shift_remove(address::basename(&old_path))
                .ok_or_else(|| FsError::not_found(old_path.clone()))?;

            let new_parent = lookup_dir_mut(&mut root, address::parent(&new_path))?;
            new_parent.entries.insert(new_name, entry);
        }

        self.notifier.emit([
            ChangeEvent::new(ChangeKind::Deleted, old_path),
            ChangeEvent::new(ChangeKind::Created, new_path),
        ]);
        Ok(())
    }

    fn delete(&self, addr: &str) -> Result<(), FsError> {
        let path = Self::path_of(addr)?;
        let name = address::basename(&path).to_string();
        if name.is_empty() {
            return Err(FsError::invalid_address(format!(
                "{}: cannot delete the root",
                addr
            )));
        }

        {
            let mut root = self.root.lock().unwrap();
            let parent = lookup_dir_mut(&mut root, address::parent(&path))?;
            parent
                .entries
                .shift_remove(&name)
                .ok_or_else(|| FsError::not_found(path.clone()))?;
            parent.mtime = now_millis();
        }

        self.notifier.emit([
            ChangeEvent::new(ChangeKind::Changed, address::parent(&path).to_string()),
            ChangeEvent::new(ChangeKind::Deleted, path),
        ]);
        Ok(())
    }

    fn create_directory(&self, addr: &str) -> Result<(), FsError> {
        let path = Self::path_of(addr)?;
        let name = address::basename(&path).to_string();
        if name.is_empty() {
            return Err(FsError::invalid_address(format!(
                "{}: cannot create the root",
                addr
            )));
        }

        {
            let mut root = self.root.lock().unwrap();
            let parent = lookup_dir_mut(&mut root, address::parent(&path))?;
            if parent.entries.contains_key(&name) {
                return Err(FsError::file_exists(path));
            }
            parent.entries.insert(name, Entry::Directory(DirNode::new()));
            parent.mtime = now_millis();
        }

        self.notifier.emit([
            ChangeEvent::new(ChangeKind::Changed, address::parent(&path).to_string()),
            ChangeEvent::new(ChangeKind::Created, path),
        ]);
        Ok(())
    }
}
