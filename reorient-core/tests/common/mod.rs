// reorient-core/tests/common/mod.rs
//
// Fakes for the two external tools. FakeSpawner and FakeMetadata share a
// MediaStore that records, per path, whether the file has a video track and
// what rotation tag it carries. The spawner applies ffmpeg's metadata
// semantics to that store: `-metadata:s:v:0 rotate=N` sets the tag on the
// output, a filtered re-encode drops it.

#![allow(dead_code)]

use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use reorient_core::error::{CoreError, CoreResult};
use reorient_core::external::{
    FfmpegProcess, FfmpegSpawner, MediaInfoDocument, MediaInfoMedia, MediaInfoTrack,
    MetadataSource,
};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct FakeMedia {
    pub has_video: bool,
    pub rotation: Option<String>,
}

pub type MediaStore = Rc<RefCell<HashMap<PathBuf, FakeMedia>>>;

pub fn new_store() -> MediaStore {
    Rc::new(RefCell::new(HashMap::new()))
}

/// Creates a source file on disk and registers its metadata.
pub fn add_source(store: &MediaStore, dir: &Path, name: &str, rotation: Option<&str>) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"source video").expect("write source");
    store.borrow_mut().insert(
        path.clone(),
        FakeMedia {
            has_video: true,
            rotation: rotation.map(str::to_string),
        },
    );
    path
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

pub struct FakeMetadata {
    store: MediaStore,
    available: bool,
    fetches: RefCell<Vec<PathBuf>>,
}

impl FakeMetadata {
    pub fn new(store: &MediaStore) -> Self {
        Self {
            store: store.clone(),
            available: true,
            fetches: RefCell::new(Vec::new()),
        }
    }

    pub fn unavailable(store: &MediaStore) -> Self {
        Self {
            available: false,
            ..Self::new(store)
        }
    }

    pub fn fetches(&self) -> Vec<PathBuf> {
        self.fetches.borrow().clone()
    }
}

impl MetadataSource for FakeMetadata {
    fn ensure_available(&self) -> CoreResult<()> {
        if self.available {
            Ok(())
        } else {
            Err(CoreError::DependencyNotFound("mediainfo".to_string()))
        }
    }

    fn fetch(&self, path: &Path) -> CoreResult<MediaInfoDocument> {
        self.fetches.borrow_mut().push(path.to_path_buf());

        let store = self.store.borrow();
        let media = store.get(path).ok_or_else(|| {
            CoreError::MetadataExtraction(
                path.display().to_string(),
                "cannot open file".to_string(),
            )
        })?;

        let mut tracks = vec![MediaInfoTrack {
            track_type: "General".to_string(),
            ..Default::default()
        }];
        if media.has_video {
            tracks.push(MediaInfoTrack {
                track_type: "Video".to_string(),
                rotation: media.rotation.clone(),
                ..Default::default()
            });
        }
        tracks.push(MediaInfoTrack {
            track_type: "Audio".to_string(),
            ..Default::default()
        });

        Ok(MediaInfoDocument {
            media: Some(MediaInfoMedia {
                reference: Some(path.display().to_string()),
                track: tracks,
            }),
        })
    }
}

// ---------------------------------------------------------------------------
// ffmpeg
// ---------------------------------------------------------------------------

/// What the next spawned command does.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Writes the output and exits 0.
    Success,
    /// Writes the output, prints warnings, and still exits 0.
    SuccessWithWarnings,
    /// Optionally writes a partial output, prints an error, exits with `code`.
    Fail { code: i32, write_partial: bool },
    /// The binary cannot be started.
    SpawnError,
}

pub struct FakeProcess {
    events: Vec<FfmpegEvent>,
    status: ExitStatus,
}

impl FfmpegProcess for FakeProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        for event in self.events.drain(..) {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        Ok(self.status)
    }
}

pub struct FakeSpawner {
    store: MediaStore,
    available: bool,
    outcomes: RefCell<VecDeque<Outcome>>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl FakeSpawner {
    pub fn new(store: &MediaStore) -> Self {
        Self {
            store: store.clone(),
            available: true,
            outcomes: RefCell::new(VecDeque::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn unavailable(store: &MediaStore) -> Self {
        Self {
            available: false,
            ..Self::new(store)
        }
    }

    /// Queues the outcome of the next spawn; unqueued spawns succeed.
    pub fn push_outcome(&self, outcome: Outcome) {
        self.outcomes.borrow_mut().push_back(outcome);
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    fn write_output(&self, args: &[String], content: &[u8]) {
        let input = arg_after(args, "-i").map(PathBuf::from);
        let Some(output) = args.last().map(PathBuf::from) else {
            return;
        };
        std::fs::write(&output, content).expect("fake ffmpeg output");

        let mut store = self.store.borrow_mut();
        let source = input.and_then(|i| store.get(&i).cloned()).unwrap_or(FakeMedia {
            has_video: true,
            rotation: None,
        });
        let rotation = match arg_after(args, "-metadata:s:v:0") {
            Some(tag) => tag.strip_prefix("rotate=").map(str::to_string),
            None if args.iter().any(|a| a == "-vf") => None,
            None => source.rotation.clone(),
        };
        store.insert(
            output,
            FakeMedia {
                has_video: source.has_video,
                rotation,
            },
        );
    }
}

impl FfmpegSpawner for FakeSpawner {
    type Process = FakeProcess;

    fn ensure_available(&self) -> CoreResult<()> {
        if self.available {
            Ok(())
        } else {
            Err(CoreError::DependencyNotFound("ffmpeg".to_string()))
        }
    }

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        let args: Vec<String> = cmd
            .as_inner()
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        self.calls.borrow_mut().push(args.clone());

        let outcome = self.outcomes.borrow_mut().pop_front().unwrap_or(Outcome::Success);
        match outcome {
            Outcome::Success => {
                self.write_output(&args, b"encoded output");
                Ok(FakeProcess {
                    events: vec![],
                    status: ExitStatus::from_raw(0),
                })
            }
            Outcome::SuccessWithWarnings => {
                self.write_output(&args, b"encoded output");
                Ok(FakeProcess {
                    events: vec![
                        FfmpegEvent::Log(LogLevel::Info, "Stream mapping:".to_string()),
                        FfmpegEvent::Log(
                            LogLevel::Warning,
                            "deprecated pixel format used".to_string(),
                        ),
                    ],
                    status: ExitStatus::from_raw(0),
                })
            }
            Outcome::Fail { code, write_partial } => {
                if write_partial {
                    self.write_output(&args, b"partial");
                }
                Ok(FakeProcess {
                    events: vec![
                        FfmpegEvent::Log(
                            LogLevel::Error,
                            "Invalid data found when processing input".to_string(),
                        ),
                        FfmpegEvent::Error("Conversion failed!".to_string()),
                    ],
                    status: ExitStatus::from_raw(code << 8),
                })
            }
            Outcome::SpawnError => Err(CoreError::CommandStart(
                "ffmpeg".to_string(),
                std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            )),
        }
    }
}

pub fn arg_after<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

pub fn output_of(args: &[String]) -> PathBuf {
    PathBuf::from(args.last().expect("command has an output"))
}
