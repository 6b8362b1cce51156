#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn referee_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("referee"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}

/// Wrap scene markup in a minimal storyboard document.
pub fn storyboard(scenes: &str) -> String {
	format!(
		"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<document \
		 type=\"com.apple.InterfaceBuilder3.CocoaTouch.Storyboard.XIB\" \
		 version=\"3.0\">\n<scenes>\n{scenes}\n</scenes>\n</document>\n"
	)
}

pub fn complete_storyboard() -> String {
	storyboard(
		r#"<scene sceneID="1"><objects>
<tableViewController storyboardIdentifier="Inbox" customClass="InboxViewController" id="a">
	<tableView key="view" id="t"><prototypes>
		<tableViewCell reuseIdentifier="MessageCell" id="c1"/>
		<tableViewCell reuseIdentifier="MessageCell" id="c2"/>
	</prototypes></tableView>
	<connections>
		<segue destination="b" kind="show" identifier="showMessage" id="s1"/>
	</connections>
</tableViewController>
</objects></scene>
<scene sceneID="2"><objects>
<viewController storyboardIdentifier="Message" id="b"/>
</objects></scene>"#,
	)
}

pub fn storyboard_missing_id() -> String {
	storyboard(
		r#"<scene sceneID="1"><objects>
<viewController storyboardIdentifier="Login" id="a"/>
<viewController id="b"/>
</objects></scene>"#,
	)
}

pub fn write_file(root: &Path, relative: &str, content: &str) -> std::io::Result<()> {
	let path = root.join(relative);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(path, content)
}
