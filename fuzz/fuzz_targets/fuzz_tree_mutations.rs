#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pw_core::{ElementKind, Node, NodeId, NodePatch};
use pw_dnd::DragSession;
use pw_session::Session;

/// One UI event, with selectors resolved against the live tree modulo its
/// current population so every generated op is meaningful.
#[derive(Arbitrary, Debug)]
enum Op {
    Add { kind_sel: u8, parent_sel: u8 },
    Update { target_sel: u8, content: Option<String>, style_val: u8 },
    Remove { target_sel: u8 },
    Select { target_sel: Option<u8> },
    Duplicate { target_sel: u8 },
    Reorder { parent_sel: u8, perm: Vec<u8> },
    Drag { kind_sel: u8, candidate_sels: Vec<u8>, commit: bool },
}

fuzz_target!(|ops: Vec<Op>| {
    // Bound the replay; deep duplicate chains grow the tree geometrically.
    let ops = &ops[..ops.len().min(64)];

    let mut session = Session::new();
    let mut drag = DragSession::new();

    for op in ops {
        match op {
            Op::Add { kind_sel, parent_sel } => {
                let parent = pick_container(session.nodes(), *parent_sel);
                let _ = session.add(kind_from(*kind_sel), parent);
            }
            Op::Update { target_sel, content, style_val } => {
                if let Some(id) = pick_node(session.nodes(), *target_sel) {
                    let mut patch = NodePatch::new().with_style("color", i32::from(*style_val));
                    if let Some(content) = content {
                        patch = patch.with_content(content.clone());
                    }
                    session.update(id, patch);
                }
            }
            Op::Remove { target_sel } => {
                // Absent ids must be absorbed as no-ops too.
                let id = pick_node(session.nodes(), *target_sel)
                    .unwrap_or(NodeId::new(u64::MAX));
                session.remove(id);
            }
            Op::Select { target_sel } => {
                let id = target_sel.and_then(|sel| pick_node(session.nodes(), sel));
                session.select(id);
            }
            Op::Duplicate { target_sel } => {
                if node_total(session.nodes()) < 2048
                    && let Some(id) = pick_node(session.nodes(), *target_sel)
                {
                    let _ = session.duplicate(id);
                }
            }
            Op::Reorder { parent_sel, perm } => {
                let parent = pick_container(session.nodes(), *parent_sel);
                let siblings: Vec<NodeId> = match parent {
                    None => session.nodes().iter().map(Node::id).collect(),
                    Some(id) => pw_tree::find(session.nodes(), id)
                        .map(|n| n.children().iter().map(Node::id).collect())
                        .unwrap_or_default(),
                };
                if !siblings.is_empty() {
                    let order: Vec<NodeId> = perm
                        .iter()
                        .take(16)
                        .map(|&sel| siblings[sel as usize % siblings.len()])
                        .collect();
                    session.reorder(parent, &order);
                }
            }
            Op::Drag { kind_sel, candidate_sels, commit } => {
                drag.begin(kind_from(*kind_sel));
                let candidates: Vec<NodeId> = candidate_sels
                    .iter()
                    .take(8)
                    .filter_map(|&sel| pick_node(session.nodes(), sel))
                    .collect();
                drag.hover(session.nodes(), &candidates);
                if *commit {
                    let _ = drag.commit(&mut session);
                } else {
                    drag.cancel();
                }
            }
        }

        check_invariants(&session);
    }
});

fn kind_from(sel: u8) -> ElementKind {
    ElementKind::ALL[sel as usize % ElementKind::ALL.len()]
}

fn collect_ids(nodes: &[Node], out: &mut Vec<NodeId>) {
    for node in nodes {
        out.push(node.id());
        collect_ids(node.children(), out);
    }
}

fn node_total(nodes: &[Node]) -> usize {
    nodes.iter().map(|n| 1 + node_total(n.children())).sum()
}

fn pick_node(tree: &[Node], sel: u8) -> Option<NodeId> {
    let mut all = Vec::new();
    collect_ids(tree, &mut all);
    if all.is_empty() {
        return None;
    }
    Some(all[sel as usize % all.len()])
}

fn pick_container(tree: &[Node], sel: u8) -> Option<NodeId> {
    fn walk(nodes: &[Node], out: &mut Vec<NodeId>) {
        for node in nodes {
            if node.kind().is_container() {
                out.push(node.id());
            }
            walk(node.children(), out);
        }
    }
    let mut containers = Vec::new();
    walk(tree, &mut containers);
    // Slot 0 is the canvas root.
    let slot = sel as usize % (containers.len() + 1);
    (slot > 0).then(|| containers[slot - 1])
}

/// Post-conditions that must hold after every event.
fn check_invariants(session: &Session) {
    let mut all = Vec::new();
    collect_ids(session.nodes(), &mut all);

    let mut deduped = all.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), all.len(), "duplicate node id");

    if let Some(selected) = session.selected_id() {
        assert!(all.contains(&selected), "selection dangles: {selected}");
        assert!(session.selected_node().is_some(), "selected node unresolvable");
    }
}
