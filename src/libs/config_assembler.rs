// Maps a store record into the local `.shopware-extension.yml` schema.
//
// Besides building the config this downloads the icon and all screenshots into
// `<extension>/src/Resources/store/`. The first failing download aborts the
// whole assembly; files downloaded before that stay on disk.

// Every way the assembly can fail, each with its own message.
use crate::libs::errors::AssembleError;
// The download seam; tests swap in a recording fake.
use crate::libs::utilities::assets::AssetFetcher;
// Debug logging macro, printed only with `--debug`.
use crate::log_debug;
// The output side: the `.shopware-extension.yml` structures.
use crate::schemas::extension_config::{
    ConfigStore, ConfigStoreFaq, ConfigStoreImage, ExtensionConfig, LocalizedFlags, Translated,
};
// The input side: what the account API returned.
use crate::schemas::store::{NamedEntry, StoreExtension, StoreImage, StoreInfo};
// 'std::fs' for creating the resources folder.
use std::fs;
use std::path::Path;

/// Store assets folder, relative to the extension root.
pub const STORE_RESOURCES_DIR: &str = "src/Resources/store";

/// Index of the German entry in positional lists (infos, image details).
const GERMAN: usize = 0;
/// Index of the English entry in positional lists (infos, image details).
const ENGLISH: usize = 1;

/// Per-language collections filled from the info records.
#[derive(Debug, Default)]
struct LanguageBucket {
    tags: Vec<String>,
    videos: Vec<String>,
    highlights: Vec<String>,
    features: Vec<String>,
    faq: Vec<ConfigStoreFaq>,
}

impl LanguageBucket {
    fn collect(&mut self, info: &StoreInfo) {
        self.tags.extend(info.tags.iter().map(|tag| tag.name.clone()));
        self.videos.extend(info.videos.iter().map(|video| video.url.clone()));
        self.highlights.extend(split_lines(&info.highlights));
        self.features.extend(split_lines(&info.features));
        self.faq.extend(info.faqs.iter().map(|faq| ConfigStoreFaq {
            question: faq.question.clone(),
            answer: faq.answer.clone(),
        }));
    }
}

/// Builds the local config for `extension`, downloading its icon and `images`
/// below `extension_root`.
pub fn assemble_config(
    extension_root: &Path,
    extension: &StoreExtension,
    images: &[StoreImage],
    fetcher: &dyn AssetFetcher,
) -> Result<ExtensionConfig, AssembleError> {
    // Step 1: make sure the resources folder exists. Failing here aborts before any download.
    let resources = extension_root.join(STORE_RESOURCES_DIR);
    if !resources.exists() {
        fs::create_dir_all(&resources).map_err(|cause| AssembleError::CreateDir {
            path: resources.clone(),
            cause,
        })?;
        log_debug!("[Assemble] Created {}", resources.display());
    }

    // Step 2: the icon. No URL (or an empty one) means no icon entry at all.
    let icon = match extension.icon_url.as_deref() {
        Some(url) if !url.is_empty() => {
            fetcher
                .fetch(url, &resources.join("icon.png"))
                .map_err(AssembleError::Icon)?;
            Some(format!("{STORE_RESOURCES_DIR}/icon.png"))
        }
        _ => None,
    };

    // Step 3: screenshots, named by their position in the API response.
    let mut config_images = Vec::with_capacity(images.len());
    for (index, image) in images.iter().enumerate() {
        let file_name = format!("img-{index}.png");
        fetcher
            .fetch(&image.remote_link, &resources.join(&file_name))
            .map_err(|cause| AssembleError::Image { index, cause })?;

        // details[0] holds the German flags, details[1] the English ones.
        let detail = move |position: usize| {
            image
                .details
                .get(position)
                .ok_or(AssembleError::MissingImageDetail {
                    index,
                    detail: position,
                })
        };
        let (german, english) = (detail(GERMAN)?, detail(ENGLISH)?);

        config_images.push(ConfigStoreImage {
            file: format!("{STORE_RESOURCES_DIR}/{file_name}"),
            activate: LocalizedFlags {
                german: german.activated,
                english: english.activated,
            },
            preview: LocalizedFlags {
                german: german.preview,
                english: english.preview,
            },
            priority: image.priority,
        });
    }

    // Step 4: tags, videos, highlights, features and FAQ go by locale prefix.
    let (german, english) = bucket_by_language(&extension.infos);

    // Step 5: description and manual are positional, unlike the buckets above.
    let info = move |position: usize| {
        extension
            .infos
            .get(position)
            .ok_or(AssembleError::MissingInfo(position))
    };
    let (german_info, english_info) = (info(GERMAN)?, info(ENGLISH)?);

    // Step 6: put it all together. Plain name lists keep source order and duplicates.
    Ok(ExtensionConfig {
        store: ConfigStore {
            icon,
            default_locale: extension.standard_locale.as_ref().map(|l| l.name.clone()),
            localizations: Some(names(&extension.localizations)),
            availabilities: Some(names(&extension.store_availabilities)),
            description: Translated::new(
                german_info.description.clone(),
                english_info.description.clone(),
            ),
            installation_manual: Translated::new(
                german_info.installation_manual.clone(),
                english_info.installation_manual.clone(),
            ),
            categories: Some(names(&extension.categories)),
            product_type: extension.product_type.as_ref().map(|t| t.name.clone()),
            tags: Translated::new(german.tags, english.tags),
            videos: Translated::new(german.videos, english.videos),
            highlights: Translated::new(german.highlights, english.highlights),
            features: Translated::new(german.features, english.features),
            faq: Translated::new(german.faq, english.faq),
            images: Some(config_images),
            automatic_bugfix_version_compatibility: Some(
                extension.automatic_bugfix_version_compatibility,
            ),
        },
    })
}

/// Routes every info record into the German bucket when its locale starts with
/// `de`, and into the English bucket otherwise.
fn bucket_by_language(infos: &[StoreInfo]) -> (LanguageBucket, LanguageBucket) {
    let mut german = LanguageBucket::default();
    let mut english = LanguageBucket::default();

    for info in infos {
        if is_german(&info.locale.name) {
            german.collect(info);
        } else {
            english.collect(info);
        }
    }

    (german, english)
}

fn is_german(locale: &str) -> bool {
    locale.get(..2) == Some("de")
}

/// Splits on `\n` and keeps empty segments: `"A\nB\n"` is `["A", "B", ""]`.
fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

fn names(entries: &[NamedEntry]) -> Vec<String> {
    entries.iter().map(|entry| entry.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::errors::FetchError;
    use crate::schemas::store::{StoreFaq, StoreImageDetail, StoreVideo};
    use std::cell::RefCell;
    use std::io;
    use std::path::PathBuf;

    /// Records every call and optionally fails for one URL.
    #[derive(Default)]
    struct RecordingFetcher {
        calls: RefCell<Vec<(String, PathBuf)>>,
        fail_on: Option<String>,
    }

    impl AssetFetcher for RecordingFetcher {
        fn fetch(&self, url: &str, target: &Path) -> Result<(), FetchError> {
            self.calls
                .borrow_mut()
                .push((url.to_string(), target.to_path_buf()));
            if self.fail_on.as_deref() == Some(url) {
                return Err(FetchError::Write(io::Error::other("disk full")));
            }
            Ok(())
        }
    }

    fn named(name: &str) -> NamedEntry {
        NamedEntry {
            name: name.to_string(),
        }
    }

    fn info(locale: &str, description: &str) -> StoreInfo {
        StoreInfo {
            locale: named(locale),
            description: description.to_string(),
            installation_manual: format!("{description} manual"),
            highlights: format!("{locale} first\n{locale} second"),
            features: format!("{locale} feature"),
            tags: vec![named(&format!("{locale} tag"))],
            videos: vec![StoreVideo {
                url: format!("https://video/{locale}"),
            }],
            faqs: vec![StoreFaq {
                question: format!("{locale}?"),
                answer: format!("{locale}!"),
            }],
        }
    }

    fn image(link: &str, priority: i64) -> StoreImage {
        StoreImage {
            remote_link: link.to_string(),
            priority,
            details: vec![
                StoreImageDetail {
                    preview: true,
                    activated: false,
                },
                StoreImageDetail {
                    preview: false,
                    activated: true,
                },
            ],
        }
    }

    fn extension() -> StoreExtension {
        StoreExtension {
            id: 42,
            name: "MyPlugin".to_string(),
            icon_url: None,
            standard_locale: Some(named("de_DE")),
            product_type: Some(named("extension")),
            automatic_bugfix_version_compatibility: true,
            categories: vec![named("Administration"), named("SEO"), named("Administration")],
            localizations: vec![named("de_DE"), named("en_GB")],
            store_availabilities: vec![named("German"), named("International")],
            infos: vec![info("de-DE", "Beschreibung"), info("en-GB", "Description")],
        }
    }

    #[test]
    fn missing_icon_url_leaves_icon_unset() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = RecordingFetcher::default();

        let config = assemble_config(dir.path(), &extension(), &[], &fetcher).unwrap();

        assert_eq!(config.store.icon, None);
        assert!(fetcher.calls.borrow().is_empty());
    }

    #[test]
    fn empty_icon_url_leaves_icon_unset() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = RecordingFetcher::default();
        let mut ext = extension();
        ext.icon_url = Some(String::new());

        let config = assemble_config(dir.path(), &ext, &[], &fetcher).unwrap();

        assert_eq!(config.store.icon, None);
        assert!(fetcher.calls.borrow().is_empty());
    }

    #[test]
    fn icon_is_downloaded_once_to_fixed_path() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = RecordingFetcher::default();
        let mut ext = extension();
        ext.icon_url = Some("https://cdn/icon.png".to_string());

        let config = assemble_config(dir.path(), &ext, &[], &fetcher).unwrap();

        assert_eq!(config.store.icon.as_deref(), Some("src/Resources/store/icon.png"));
        assert_eq!(
            *fetcher.calls.borrow(),
            vec![(
                "https://cdn/icon.png".to_string(),
                dir.path().join("src/Resources/store/icon.png")
            )]
        );
    }

    #[test]
    fn creates_resources_folder() {
        let dir = tempfile::tempdir().unwrap();

        assemble_config(dir.path(), &extension(), &[], &RecordingFetcher::default()).unwrap();

        assert!(dir.path().join("src/Resources/store").is_dir());
    }

    #[test]
    fn unusable_resources_folder_aborts_before_downloads() {
        let dir = tempfile::tempdir().unwrap();
        // A plain file where the `src` folder should be.
        fs::write(dir.path().join("src"), "not a folder").unwrap();
        let fetcher = RecordingFetcher::default();
        let mut ext = extension();
        ext.icon_url = Some("https://cdn/icon.png".to_string());

        let err = assemble_config(dir.path(), &ext, &[image("https://cdn/a.png", 1)], &fetcher)
            .unwrap_err();

        assert!(matches!(
            err,
            AssembleError::CreateDir { ref path, .. } if path == &dir.path().join("src/Resources/store")
        ));
        assert!(fetcher.calls.borrow().is_empty());
    }

    #[test]
    fn images_keep_order_and_read_details_by_position() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = RecordingFetcher::default();
        let images = vec![image("https://cdn/a.png", 3), image("https://cdn/b.png", 1)];

        let config = assemble_config(dir.path(), &extension(), &images, &fetcher).unwrap();
        let entries = config.store.images.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].file, "src/Resources/store/img-0.png");
        assert_eq!(entries[1].file, "src/Resources/store/img-1.png");
        assert_eq!(entries[0].priority, 3);
        assert_eq!(entries[1].priority, 1);
        assert_eq!(
            entries[0].preview,
            LocalizedFlags {
                german: true,
                english: false
            }
        );
        assert_eq!(
            entries[0].activate,
            LocalizedFlags {
                german: false,
                english: true
            }
        );

        let calls = fetcher.calls.borrow();
        assert_eq!(calls[0].0, "https://cdn/a.png");
        assert_eq!(calls[0].1, dir.path().join("src/Resources/store/img-0.png"));
        assert_eq!(calls[1].1, dir.path().join("src/Resources/store/img-1.png"));
    }

    #[test]
    fn image_with_single_detail_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut broken = image("https://cdn/a.png", 1);
        broken.details.truncate(1);

        let err = assemble_config(dir.path(), &extension(), &[broken], &RecordingFetcher::default())
            .unwrap_err();

        assert!(matches!(
            err,
            AssembleError::MissingImageDetail {
                index: 0,
                detail: 1
            }
        ));
    }

    #[test]
    fn lists_keep_source_order_and_duplicates() {
        let dir = tempfile::tempdir().unwrap();

        let config =
            assemble_config(dir.path(), &extension(), &[], &RecordingFetcher::default()).unwrap();

        assert_eq!(
            config.store.categories.unwrap(),
            vec!["Administration", "SEO", "Administration"]
        );
        assert_eq!(config.store.localizations.unwrap(), vec!["de_DE", "en_GB"]);
        assert_eq!(
            config.store.availabilities.unwrap(),
            vec!["German", "International"]
        );
        assert_eq!(config.store.default_locale.as_deref(), Some("de_DE"));
        assert_eq!(config.store.product_type.as_deref(), Some("extension"));
        assert_eq!(config.store.automatic_bugfix_version_compatibility, Some(true));
    }

    #[test]
    fn locale_prefix_decides_bucket() {
        let infos = vec![
            info("de-DE", "a"),
            info("en-GB", "b"),
            info("fr-FR", "c"),
        ];

        let (german, english) = bucket_by_language(&infos);

        assert_eq!(german.tags, vec!["de-DE tag"]);
        assert_eq!(english.tags, vec!["en-GB tag", "fr-FR tag"]);
        assert_eq!(english.videos, vec!["https://video/en-GB", "https://video/fr-FR"]);
        assert_eq!(
            german.highlights,
            vec!["de-DE first", "de-DE second"]
        );
        assert_eq!(english.faq[1].question, "fr-FR?");
    }

    #[test]
    fn short_locale_goes_to_english_bucket() {
        assert!(!is_german("d"));
        assert!(!is_german(""));
        assert!(is_german("de_DE"));
    }

    #[test]
    fn split_keeps_trailing_empty_segment() {
        assert_eq!(split_lines("A\nB\n"), vec!["A", "B", ""]);
        assert_eq!(split_lines("A\n\nB"), vec!["A", "", "B"]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn description_and_manual_are_positional() {
        let dir = tempfile::tempdir().unwrap();
        let mut ext = extension();
        // English first: the buckets follow the locale, description does not.
        ext.infos.reverse();

        let config = assemble_config(dir.path(), &ext, &[], &RecordingFetcher::default()).unwrap();

        assert_eq!(config.store.description.german.as_deref(), Some("Description"));
        assert_eq!(config.store.description.english.as_deref(), Some("Beschreibung"));
        assert_eq!(
            config.store.installation_manual.german.as_deref(),
            Some("Description manual")
        );
        assert_eq!(
            config.store.tags.german,
            Some(vec!["de-DE tag".to_string()])
        );
    }

    #[test]
    fn single_info_record_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut ext = extension();
        ext.infos.truncate(1);

        let err = assemble_config(dir.path(), &ext, &[], &RecordingFetcher::default()).unwrap_err();

        assert!(matches!(err, AssembleError::MissingInfo(1)));
    }

    #[test]
    fn failing_icon_download_aborts_before_images() {
        let dir = tempfile::tempdir().unwrap();
        let mut ext = extension();
        ext.icon_url = Some("https://cdn/icon.png".to_string());
        let fetcher = RecordingFetcher {
            fail_on: Some("https://cdn/icon.png".to_string()),
            ..Default::default()
        };

        let err = assemble_config(dir.path(), &ext, &[image("https://cdn/a.png", 1)], &fetcher)
            .unwrap_err();

        assert!(matches!(err, AssembleError::Icon(_)));
        assert_eq!(fetcher.calls.borrow().len(), 1);
    }

    #[test]
    fn failing_image_download_reports_index() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = RecordingFetcher {
            fail_on: Some("https://cdn/b.png".to_string()),
            ..Default::default()
        };
        let images = vec![image("https://cdn/a.png", 1), image("https://cdn/b.png", 2)];

        let err = assemble_config(dir.path(), &extension(), &images, &fetcher).unwrap_err();

        assert!(matches!(err, AssembleError::Image { index: 1, .. }));
    }
}
