//! Browse command - interactive query builder
//!
//! Drives a `QueryBuilder` from dialoguer prompts. The category list and the
//! search box are wired in through the provider traits; both views print to
//! the terminal after every change.

use crate::QbError;
use crate::builder::{
    CategoryListBinding, CategoryListProvider, Labels, QueryBuilder, SearchBinding, SearchProvider,
};
use crate::catalog::Catalog;
use crate::output::{ExportFormat, TerminalRenderer, export_selection};
use crate::presets::PresetManager;
use crate::selection::Selection;
use dialoguer::{Input, MultiSelect, Select, theme::ColorfulTheme};
use log::{info, warn};
use std::path::Path;

type Result<T> = std::result::Result<T, QbError>;

/// Settings for an interactive session
#[derive(Debug, Clone)]
pub struct BrowseOptions<'p> {
    /// Preset kept in sync with every change
    pub save: Option<&'p str>,
    /// Catalog file recorded in the saved preset
    pub catalog_path: &'p Path,
    /// Texts shown by the views
    pub labels: Labels,
    /// Suppress informational output
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Category,
    Search,
    Pick,
    Remove,
    Clear,
    Done,
}

const MENU: [(MenuAction, &str); 6] = [
    (MenuAction::Pick, "Pick attributes"),
    (MenuAction::Category, "Switch category"),
    (MenuAction::Search, "Search"),
    (MenuAction::Remove, "Remove selected"),
    (MenuAction::Clear, "Clear all"),
    (MenuAction::Done, "Done"),
];

/// Category list backed by a dialoguer `Select`
#[derive(Debug, Default)]
struct CategoryPrompt {
    binding: Option<CategoryListBinding>,
}

impl CategoryListProvider for CategoryPrompt {
    fn bind(&mut self, binding: CategoryListBinding) {
        self.binding = Some(binding);
    }
}

impl CategoryPrompt {
    /// Ask for a category; `None` when the prompt is dismissed
    fn pick(&self, theme: &ColorfulTheme) -> Result<Option<String>> {
        let Some(binding) = &self.binding else {
            return Ok(None);
        };

        let labels: Vec<&str> = binding.items.iter().map(|item| item.label.as_str()).collect();
        let default = binding
            .initial_selection
            .as_ref()
            .and_then(|id| binding.items.iter().position(|item| &item.id == id))
            .unwrap_or(0);

        let choice = Select::with_theme(theme)
            .with_prompt("Category")
            .items(labels.as_slice())
            .default(default)
            .interact_opt()?;

        Ok(choice.and_then(|index| binding.items.get(index).map(|item| item.id.clone())))
    }
}

/// Search box backed by a dialoguer `Input`
#[derive(Debug, Default)]
struct SearchPrompt {
    binding: Option<SearchBinding>,
}

impl SearchProvider for SearchPrompt {
    fn bind(&mut self, binding: SearchBinding) {
        self.binding = Some(binding);
    }
}

impl SearchPrompt {
    fn ask(&self, theme: &ColorfulTheme, current: &str) -> Result<String> {
        let prompt = match &self.binding {
            Some(binding) => format!("{} ({} attributes)", binding.placeholder, binding.data.len()),
            None => "Search".to_string(),
        };

        let term: String = Input::with_theme(theme)
            .with_prompt(prompt)
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;

        Ok(term)
    }
}

/// Run an interactive session and print the final selection as JSON
///
/// With `options.save`, the named preset is rewritten after every change.
///
/// # Errors
///
/// Returns `QbError` if `initial` does not match the catalog or a prompt fails.
pub fn execute(
    catalog: &Catalog,
    initial: Selection,
    presets: &PresetManager,
    options: &BrowseOptions<'_>,
) -> Result<()> {
    let mut builder = QueryBuilder::builder()
        .catalog(catalog)
        .initial(initial)
        .labels(options.labels.clone())
        .sink(Box::new(TerminalRenderer::new(options.quiet)));

    if let Some(name) = options.save {
        let manager = presets.clone();
        let name = name.to_string();
        let source = options.catalog_path.to_path_buf();
        builder = builder.on_change(move |selection: &Selection| {
            if let Err(e) = manager.save(&name, "", selection, Some(&source), true) {
                warn!("could not save preset '{name}': {e}");
            }
        });
    }

    let mut builder = builder.build()?;
    let theme = ColorfulTheme::default();

    if !run(&mut builder, &theme)? {
        if !options.quiet {
            println!("Browse cancelled.");
        }
        return Ok(());
    }

    let selection = builder.dispose();
    info!("browse finished with {} attribute(s)", selection.len());
    println!("{}", export_selection(&selection, ExportFormat::Json)?);
    Ok(())
}

/// Menu loop; `false` when the user backs out
fn run(builder: &mut QueryBuilder<'_>, theme: &ColorfulTheme) -> Result<bool> {
    let labels: Vec<&str> = MENU.iter().map(|(_, label)| *label).collect();

    loop {
        let Some(choice) = Select::with_theme(theme)
            .with_prompt(builder.labels().title.as_str())
            .items(labels.as_slice())
            .default(0)
            .interact_opt()?
        else {
            return Ok(false);
        };

        match MENU[choice].0 {
            MenuAction::Category => {
                let mut list = CategoryPrompt::default();
                builder.attach_category_list(&mut list);
                if let Some(id) = list.pick(theme)? {
                    builder.select_category_by_id(&id)?;
                }
            }
            MenuAction::Search => {
                let mut search = SearchPrompt::default();
                builder.attach_search(&mut search);
                let term = search.ask(theme, &builder.browse_context().search_term)?;
                builder.set_search_term(term);
            }
            MenuAction::Pick => pick_attributes(builder, theme)?,
            MenuAction::Remove => remove_attributes(builder, theme)?,
            MenuAction::Clear => {
                builder.clear();
            }
            MenuAction::Done => return Ok(true),
        }
    }
}

/// Toggle the visible attributes of the active category
fn pick_attributes(builder: &mut QueryBuilder<'_>, theme: &ColorfulTheme) -> Result<()> {
    let visible = builder.visible_attributes();
    if visible.is_empty() {
        println!("{}", builder.labels().no_results_text);
        return Ok(());
    }

    let category = builder.browse_context().active_category.clone();
    let checked: Vec<bool> = visible
        .iter()
        .map(|attribute| builder.store().is_selected(&category, attribute))
        .collect();

    let Some(chosen) = MultiSelect::with_theme(theme)
        .with_prompt(category.as_str())
        .items(visible.as_slice())
        .defaults(&checked)
        .interact_opt()?
    else {
        return Ok(());
    };

    for (index, attribute) in visible.iter().enumerate() {
        if chosen.contains(&index) {
            builder.check(attribute)?;
        } else if checked[index] {
            builder.deselect(&category, attribute);
        }
    }

    Ok(())
}

/// Remove picks from any category
fn remove_attributes(builder: &mut QueryBuilder<'_>, theme: &ColorfulTheme) -> Result<()> {
    let pairs: Vec<(String, String)> = builder
        .grouped_view()
        .into_iter()
        .flat_map(|group| {
            let category = group.category;
            group
                .attributes
                .into_iter()
                .map(move |attribute| (category.clone(), attribute))
        })
        .collect();

    if pairs.is_empty() {
        println!("{}", builder.labels().no_filters_text);
        return Ok(());
    }

    let labels: Vec<String> = pairs
        .iter()
        .map(|(category, attribute)| format!("{category}: {attribute}"))
        .collect();

    let Some(chosen) = MultiSelect::with_theme(theme)
        .with_prompt("Remove")
        .items(labels.as_slice())
        .interact_opt()?
    else {
        return Ok(());
    };

    for index in chosen {
        if let Some((category, attribute)) = pairs.get(index) {
            builder.deselect(category, attribute);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalog;

    #[test]
    fn test_category_prompt_receives_binding() {
        let catalog = sample_catalog();
        let mut builder = QueryBuilder::new(&catalog);
        builder.select_category("Region").unwrap();

        let mut list = CategoryPrompt::default();
        builder.attach_category_list(&mut list);

        let binding = list.binding.unwrap();
        assert_eq!(binding.items.len(), 3);
        assert_eq!(binding.initial_selection.as_deref(), Some("region"));
    }

    #[test]
    fn test_search_prompt_receives_active_attributes() {
        let catalog = sample_catalog();
        let builder = QueryBuilder::new(&catalog);

        let mut search = SearchPrompt::default();
        builder.attach_search(&mut search);

        let binding = search.binding.unwrap();
        assert_eq!(binding.data, vec!["Tech", "Finance", "Healthcare"]);
    }

    #[test]
    fn test_unbound_category_prompt_returns_none() {
        let list = CategoryPrompt::default();
        assert!(list.pick(&ColorfulTheme::default()).unwrap().is_none());
    }

    #[test]
    fn test_menu_ends_with_done() {
        assert_eq!(MENU.last().map(|(action, _)| *action), Some(MenuAction::Done));
    }

    #[test]
    fn test_autosave_writes_preset_on_change() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = sample_catalog();
        let presets = PresetManager::new(dir.path().join("presets.toml"));
        let source = dir.path().join("catalog.toml");

        let manager = presets.clone();
        let path = source.clone();
        let mut builder = QueryBuilder::builder()
            .catalog(&catalog)
            .on_change(move |selection: &Selection| {
                manager.save("live", "", selection, Some(&path), true).unwrap();
            })
            .build()
            .unwrap();

        builder.select("Region", "EU").unwrap();
        builder.check("Tech").unwrap();

        let preset = presets.get("live").unwrap();
        assert_eq!(preset.selection.len(), 2);
        assert_eq!(preset.catalog, Some(source));
    }
}
